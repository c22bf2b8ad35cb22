use betonmix_data::{CementProfileRecord, GradeRecord, IngredientRecord, MixTableRecord};

use crate::error::{MixError, Result};

/// Parse the plain-text mix table format.
///
/// ```text
/// # comment
/// version: 1
/// C20 | CEM 1 | cement=300 water=180 sand=800 gravel=1200
/// ```
///
/// Rows of the same grade are grouped under the first occurrence of that
/// grade. Quantity checks happen in [`MixTable::from_records`].
///
/// [`MixTable::from_records`]: crate::MixTable::from_records
pub fn parse_mix_table(text: &str) -> Result<MixTableRecord> {
    let mut version = String::from("unknown");
    let mut grades: Vec<GradeRecord> = Vec::new();

    for (i, raw) in text.lines().enumerate() {
        let lineno = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("version:") {
            version = rest.trim().to_string();
            continue;
        }

        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        let [grade, profile, quantities] = fields[..] else {
            return Err(MixError::DataError(format!(
                "line {lineno}: expected 'GRADE | PROFILE | ingredient=kg ...'"
            )));
        };

        let ingredients = parse_ingredients(quantities, lineno)?;
        let profile = CementProfileRecord {
            profile: profile.to_string(),
            ingredients,
        };

        match grades
            .iter_mut()
            .find(|g| g.grade.eq_ignore_ascii_case(grade))
        {
            Some(existing) => existing.profiles.push(profile),
            None => grades.push(GradeRecord {
                grade: grade.to_string(),
                profiles: vec![profile],
            }),
        }
    }

    Ok(MixTableRecord { version, grades })
}

fn parse_ingredients(field: &str, lineno: usize) -> Result<Vec<IngredientRecord>> {
    field
        .split_whitespace()
        .map(|pair| {
            let (name, value) = pair.split_once('=').ok_or_else(|| {
                MixError::DataError(format!("line {lineno}: expected name=kg, got '{pair}'"))
            })?;
            let kg_per_m3 = value.parse::<f64>().map_err(|_| {
                MixError::DataError(format!(
                    "line {lineno}: invalid quantity '{value}' for {name}"
                ))
            })?;
            Ok(IngredientRecord {
                name: name.to_string(),
                kg_per_m3,
            })
        })
        .collect()
}
