use std::collections::HashMap;
use std::sync::OnceLock;

use betonmix_data::{CementProfileRecord, GradeRecord, IngredientRecord, MixTableRecord};

use crate::error::{MixError, Result};
use crate::parser::parse_mix_table;

const TABLE_SOURCE: &str = include_str!("../data/mix_table.dat");

static BUILTIN: OnceLock<MixTable> = OnceLock::new();

/// Per-cubic-meter quantities of each ingredient, in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct MixRatio {
    ingredients: Vec<(String, f64)>,
}

impl MixRatio {
    /// Kilograms of `ingredient` per m³ of concrete.
    pub fn get(&self, ingredient: &str) -> Option<f64> {
        self.ingredients
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(ingredient))
            .map(|&(_, kg)| kg)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ingredients.iter().map(|(name, kg)| (name.as_str(), *kg))
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

#[derive(Debug)]
struct ProfileEntry {
    name: String,
    ratio: MixRatio,
}

#[derive(Debug)]
struct GradeEntry {
    name: String,
    profiles: Vec<ProfileEntry>,
    profile_index: HashMap<String, usize>,
}

/// Immutable mapping from (grade, cement profile) to a [`MixRatio`].
///
/// Grades and profiles keep the order of the source data. Identifiers
/// are matched ignoring ASCII case and whitespace, so `"cem1"` finds
/// `"CEM 1"`.
#[derive(Debug)]
pub struct MixTable {
    version: String,
    grades: Vec<GradeEntry>,
    grade_index: HashMap<String, usize>,
}

/// Normalized lookup key for grade and profile identifiers.
fn key(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

impl MixTable {
    /// The canonical table shipped with the crate (grades C5 to C80).
    ///
    /// Parsed from the embedded source on first use.
    pub fn builtin() -> &'static MixTable {
        BUILTIN.get_or_init(|| {
            MixTable::parse(TABLE_SOURCE).expect("embedded mix table is invalid")
        })
    }

    /// Build a table from the text format used by `data/mix_table.dat`.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_records(parse_mix_table(text)?)
    }

    /// Build a table from serialized records, checking that every
    /// quantity is finite and strictly positive.
    pub fn from_records(record: MixTableRecord) -> Result<Self> {
        let mut grades = Vec::with_capacity(record.grades.len());
        let mut grade_index = HashMap::new();

        for grade_rec in record.grades {
            let grade_name = grade_rec.grade.trim().to_string();
            if grade_name.is_empty() {
                return Err(MixError::DataError("empty grade name".to_string()));
            }
            if grade_rec.profiles.is_empty() {
                return Err(MixError::DataError(format!(
                    "grade '{grade_name}' has no cement profiles"
                )));
            }

            let mut profiles = Vec::with_capacity(grade_rec.profiles.len());
            let mut profile_index = HashMap::new();
            for profile_rec in grade_rec.profiles {
                let profile_name = profile_rec.profile.trim().to_string();
                if profile_name.is_empty() {
                    return Err(MixError::DataError(format!(
                        "empty cement profile name under grade '{grade_name}'"
                    )));
                }
                let ratio = build_ratio(&grade_name, &profile_name, profile_rec.ingredients)?;
                if profile_index
                    .insert(key(&profile_name), profiles.len())
                    .is_some()
                {
                    return Err(MixError::DataError(format!(
                        "duplicate cement profile '{profile_name}' under grade '{grade_name}'"
                    )));
                }
                profiles.push(ProfileEntry {
                    name: profile_name,
                    ratio,
                });
            }

            if grade_index.insert(key(&grade_name), grades.len()).is_some() {
                return Err(MixError::DataError(format!(
                    "duplicate grade '{grade_name}'"
                )));
            }
            grades.push(GradeEntry {
                name: grade_name,
                profiles,
                profile_index,
            });
        }

        Ok(MixTable {
            version: record.version,
            grades,
            grade_index,
        })
    }

    /// Decode a postcard-serialized, zstd-compressed [`MixTableRecord`],
    /// as written by `betonmix-generate`.
    #[cfg(feature = "compressed")]
    pub fn from_compressed(bytes: &[u8]) -> Result<Self> {
        let mut decoder = ruzstd::decoding::StreamingDecoder::new(bytes)
            .map_err(|e| MixError::DataError(format!("invalid zstd frame: {e}")))?;
        let mut decompressed = Vec::new();
        std::io::Read::read_to_end(&mut decoder, &mut decompressed)
            .map_err(|e| MixError::DataError(format!("failed to decompress table: {e}")))?;

        let record: MixTableRecord = postcard::from_bytes(&decompressed)
            .map_err(|e| MixError::DataError(format!("failed to deserialize table: {e}")))?;
        Self::from_records(record)
    }

    /// Export the table back into its serializable form.
    pub fn to_records(&self) -> MixTableRecord {
        MixTableRecord {
            version: self.version.clone(),
            grades: self
                .grades
                .iter()
                .map(|g| GradeRecord {
                    grade: g.name.clone(),
                    profiles: g
                        .profiles
                        .iter()
                        .map(|p| CementProfileRecord {
                            profile: p.name.clone(),
                            ingredients: p
                                .ratio
                                .iter()
                                .map(|(name, kg)| IngredientRecord {
                                    name: name.to_string(),
                                    kg_per_m3: kg,
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Grade names in table order.
    pub fn grades(&self) -> impl Iterator<Item = &str> {
        self.grades.iter().map(|g| g.name.as_str())
    }

    /// Cement profile names defined for `grade`, in table order.
    pub fn cement_profiles(&self, grade: &str) -> Result<Vec<&str>> {
        let entry = self.grade_entry(grade)?;
        Ok(entry.profiles.iter().map(|p| p.name.as_str()).collect())
    }

    /// Canonical spelling of a grade identifier.
    pub fn resolve_grade(&self, grade: &str) -> Result<&str> {
        Ok(&self.grade_entry(grade)?.name)
    }

    /// Per-cubic-meter quantities for a grade and cement profile.
    ///
    /// The grade is resolved first, so an unknown grade is reported as
    /// such even when the profile is unknown too.
    pub fn lookup(&self, grade: &str, cement_profile: &str) -> Result<&MixRatio> {
        Ok(&self.profile_entry(grade, cement_profile)?.1.ratio)
    }

    /// Like [`lookup`](Self::lookup), also returning the canonical grade
    /// and profile names.
    pub(crate) fn resolve(
        &self,
        grade: &str,
        cement_profile: &str,
    ) -> Result<(&str, &str, &MixRatio)> {
        let (g, p) = self.profile_entry(grade, cement_profile)?;
        Ok((&g.name, &p.name, &p.ratio))
    }

    fn grade_entry(&self, grade: &str) -> Result<&GradeEntry> {
        self.grade_index
            .get(&key(grade))
            .map(|&i| &self.grades[i])
            .ok_or_else(|| MixError::UnknownGrade(grade.to_string()))
    }

    fn profile_entry(
        &self,
        grade: &str,
        cement_profile: &str,
    ) -> Result<(&GradeEntry, &ProfileEntry)> {
        let g = self.grade_entry(grade)?;
        let p = g
            .profile_index
            .get(&key(cement_profile))
            .map(|&i| &g.profiles[i])
            .ok_or_else(|| MixError::UnknownCementProfile {
                grade: g.name.clone(),
                profile: cement_profile.to_string(),
            })?;
        Ok((g, p))
    }
}

fn build_ratio(
    grade: &str,
    profile: &str,
    ingredients: Vec<IngredientRecord>,
) -> Result<MixRatio> {
    if ingredients.is_empty() {
        return Err(MixError::DataError(format!(
            "{grade}/{profile} has no ingredients"
        )));
    }

    let mut out: Vec<(String, f64)> = Vec::with_capacity(ingredients.len());
    for IngredientRecord { name, kg_per_m3 } in ingredients {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(MixError::DataError(format!(
                "{grade}/{profile} has an unnamed ingredient"
            )));
        }
        if !kg_per_m3.is_finite() || kg_per_m3 <= 0.0 {
            return Err(MixError::DataError(format!(
                "{grade}/{profile}: {name} must be a positive quantity, got {kg_per_m3}"
            )));
        }
        if out.iter().any(|(n, _)| n.eq_ignore_ascii_case(&name)) {
            return Err(MixError::DataError(format!(
                "{grade}/{profile}: duplicate ingredient '{name}'"
            )));
        }
        out.push((name, kg_per_m3));
    }
    Ok(MixRatio { ingredients: out })
}
