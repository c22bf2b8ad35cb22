#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A complete mix table as stored in the compressed blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixTableRecord {
    pub version: String,
    pub grades: Vec<GradeRecord>,
}

/// One concrete strength class and the cement profiles defined for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub grade: String,
    pub profiles: Vec<CementProfileRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CementProfileRecord {
    pub profile: String,
    pub ingredients: Vec<IngredientRecord>,
}

/// Quantity of one ingredient per cubic meter of concrete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub name: String,
    pub kg_per_m3: f64,
}
