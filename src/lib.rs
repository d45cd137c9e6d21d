pub mod core;
pub mod domain;
pub mod utils;

pub use crate::core::{adders::default_adders, engine::ReportEngine};
pub use crate::domain::model::SumReport;
pub use crate::domain::ports::Adder;
pub use crate::utils::error::{ReportError, Result};
