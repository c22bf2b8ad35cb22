pub mod calc;
pub mod error;
pub mod parser;
pub mod report;
pub mod table;
pub mod volume;

pub use betonmix_data;
pub use calc::MixQuantities;
pub use error::{AmountProblem, MixError, Result};
pub use report::Language;
pub use table::{MixRatio, MixTable};
pub use volume::Volume;
