pub mod adders;
pub mod engine;

pub use crate::domain::model::SumReport;
pub use crate::domain::ports::Adder;
pub use crate::utils::error::Result;
