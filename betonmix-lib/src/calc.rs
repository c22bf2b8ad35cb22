use crate::error::Result;
use crate::table::MixTable;
use crate::volume::Volume;

/// Ingredient masses for a requested volume of concrete.
#[derive(Debug, Clone, PartialEq)]
pub struct MixQuantities {
    /// Grade as spelled in the table.
    pub grade: String,
    /// Cement profile as spelled in the table.
    pub cement_profile: String,
    /// Requested volume in m³.
    pub volume: f64,
    /// (ingredient, kg) in table order.
    pub quantities: Vec<(String, f64)>,
}

impl MixQuantities {
    /// Mass of `ingredient` in kg.
    pub fn get(&self, ingredient: &str) -> Option<f64> {
        self.quantities
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(ingredient))
            .map(|&(_, kg)| kg)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.quantities.iter().map(|(name, kg)| (name.as_str(), *kg))
    }

    /// Combined mass of all ingredients in kg.
    pub fn total_mass(&self) -> f64 {
        self.quantities.iter().map(|(_, kg)| kg).sum()
    }
}

impl MixTable {
    /// Scale the mix ratio of `grade`/`cement_profile` to `volume` m³.
    ///
    /// The volume is validated before the table is consulted, so an
    /// invalid amount is reported even for an unknown grade.
    pub fn compute(
        &self,
        grade: &str,
        cement_profile: &str,
        volume: f64,
    ) -> Result<MixQuantities> {
        let volume = Volume::new(volume)?;
        self.compute_volume(grade, cement_profile, volume)
    }

    /// Same as [`compute`](Self::compute) with the volume as entered by a
    /// user, e.g. `"2,5"`.
    pub fn compute_text(
        &self,
        grade: &str,
        cement_profile: &str,
        volume: &str,
    ) -> Result<MixQuantities> {
        let volume: Volume = volume.parse()?;
        self.compute_volume(grade, cement_profile, volume)
    }

    pub fn compute_volume(
        &self,
        grade: &str,
        cement_profile: &str,
        volume: Volume,
    ) -> Result<MixQuantities> {
        let (grade, cement_profile, ratio) = self.resolve(grade, cement_profile)?;
        let v = volume.cubic_meters();
        let quantities = ratio
            .iter()
            .map(|(name, kg_per_m3)| (name.to_string(), v * kg_per_m3))
            .collect();

        Ok(MixQuantities {
            grade: grade.to_string(),
            cement_profile: cement_profile.to_string(),
            volume: v,
            quantities,
        })
    }
}
