use crate::calc::MixQuantities;
use crate::error::{AmountProblem, MixError};

/// Language for user-facing labels and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Turkish,
}

impl Language {
    /// Parse a language tag such as `"en"`, `"tr"` or `"tr-TR"`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or("");
        match primary.to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "tr" | "turkish" => Some(Language::Turkish),
            _ => None,
        }
    }
}

/// Display label for an ingredient. Unknown ingredients keep their name.
pub fn ingredient_label(ingredient: &str, language: Language) -> &str {
    if language == Language::English {
        return ingredient;
    }
    match ingredient.to_ascii_lowercase().as_str() {
        "cement" => "Çimento",
        "water" => "Su",
        "sand" => "Kum",
        "gravel" => "Çakıl",
        _ => ingredient,
    }
}

/// One line per ingredient: `"cement: 600.00 kg"`.
pub fn format_quantities(result: &MixQuantities, language: Language) -> Vec<String> {
    result
        .iter()
        .map(|(name, kg)| format!("{}: {kg:.2} kg", ingredient_label(name, language)))
        .collect()
}

/// Sentence describing `error` for the end user.
pub fn error_message(error: &MixError, language: Language) -> String {
    match (language, error) {
        (Language::English, MixError::InvalidAmount { problem, .. }) => match problem {
            AmountProblem::Empty => "Please fill in the amount.".to_string(),
            _ => "Please enter a valid amount.".to_string(),
        },
        (Language::English, MixError::UnknownGrade(_)) => "Concrete grade not found.".to_string(),
        (Language::English, MixError::UnknownCementProfile { .. }) => {
            "Cement type not found.".to_string()
        }
        (Language::English, MixError::DataError(msg)) => format!("Data error: {msg}"),

        (Language::Turkish, MixError::InvalidAmount { problem, .. }) => match problem {
            AmountProblem::Empty => "Lütfen miktar alanını doldurun.".to_string(),
            _ => "Lütfen geçerli bir miktar giriniz.".to_string(),
        },
        (Language::Turkish, MixError::UnknownGrade(_)) => "Beton türü bulunamadı.".to_string(),
        (Language::Turkish, MixError::UnknownCementProfile { .. }) => {
            "Çimento türü bulunamadı.".to_string()
        }
        (Language::Turkish, MixError::DataError(msg)) => format!("Veri hatası: {msg}"),
    }
}
