use std::io::Write;

use crate::utils::error::Result;

/// Results of running every registered adder, in definition order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumReport {
    pub results: Vec<i64>,
}

impl SumReport {
    pub fn new(results: Vec<i64>) -> Self {
        Self { results }
    }

    /// Decimal results joined by single spaces, in adder-definition order.
    pub fn render(&self) -> String {
        self.results
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Writes the rendered report plus a trailing newline to `sink`.
    pub fn write_line<W: Write>(&self, sink: &mut W) -> Result<()> {
        writeln!(sink, "{}", self.render())?;
        Ok(())
    }
}
