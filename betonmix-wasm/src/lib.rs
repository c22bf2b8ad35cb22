//! WASM bindings for betonmix.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p betonmix-wasm
//! ```

use js_sys::Array;
use wasm_bindgen::prelude::*;

use betonmix::report::{error_message, format_quantities};
use betonmix::{Language, MixQuantities, MixTable};

fn table() -> &'static MixTable {
    MixTable::builtin()
}

fn parse_language(lang: &str) -> Result<Language, JsError> {
    Language::from_tag(lang)
        .ok_or_else(|| JsError::new(&format!("unsupported language: {lang}")))
}

fn to_js(e: betonmix::MixError) -> JsError {
    JsError::new(&e.to_string())
}

/// `[[name, kg], ...]` in table order.
fn pairs(result: &MixQuantities) -> Array {
    result
        .iter()
        .map(|(name, kg)| Array::of2(&JsValue::from_str(name), &JsValue::from_f64(kg)))
        .collect()
}

// ── Table contents ──

#[wasm_bindgen]
pub fn table_version() -> String {
    table().version().to_string()
}

/// Concrete grades, for the grade picker.
#[wasm_bindgen]
pub fn grades() -> Vec<String> {
    table().grades().map(str::to_string).collect()
}

/// Cement profiles available for `grade`, for the dependent picker.
#[wasm_bindgen]
pub fn cement_profiles(grade: &str) -> Result<Vec<String>, JsError> {
    let profiles = table().cement_profiles(grade).map_err(to_js)?;
    Ok(profiles.into_iter().map(str::to_string).collect())
}

/// Returns `[[ingredient, kg_per_m3], ...]` for one cubic meter.
#[wasm_bindgen]
pub fn mix_ratio(grade: &str, cement_profile: &str) -> Result<Array, JsError> {
    let ratio = table().lookup(grade, cement_profile).map_err(to_js)?;
    Ok(ratio
        .iter()
        .map(|(name, kg)| Array::of2(&JsValue::from_str(name), &JsValue::from_f64(kg)))
        .collect())
}

// ── Calculation ──

/// Returns `[[ingredient, kg], ...]` for `volume` m³.
#[wasm_bindgen]
pub fn compute(grade: &str, cement_profile: &str, volume: f64) -> Result<Array, JsError> {
    let result = table()
        .compute(grade, cement_profile, volume)
        .map_err(to_js)?;
    Ok(pairs(&result))
}

/// Like `compute`, with the volume as typed into a text field.
#[wasm_bindgen]
pub fn compute_text(grade: &str, cement_profile: &str, volume: &str) -> Result<Array, JsError> {
    let result = table()
        .compute_text(grade, cement_profile, volume)
        .map_err(to_js)?;
    Ok(pairs(&result))
}

/// Result lines ready for display (`"Çimento: 600.00 kg"`).
///
/// Calculation errors are thrown with a localized message that the caller
/// can show directly.
#[wasm_bindgen]
pub fn format_result(
    grade: &str,
    cement_profile: &str,
    volume: &str,
    lang: &str,
) -> Result<Vec<String>, JsError> {
    let language = parse_language(lang)?;
    match table().compute_text(grade, cement_profile, volume) {
        Ok(result) => Ok(format_quantities(&result, language)),
        Err(e) => Err(JsError::new(&error_message(&e, language))),
    }
}
