use crate::domain::model::SumReport;
use crate::domain::ports::Adder;
use crate::utils::error::{ReportError, Result};

pub struct ReportEngine {
    adders: Vec<Box<dyn Adder>>,
}

impl ReportEngine {
    pub fn new(adders: Vec<Box<dyn Adder>>) -> Self {
        Self { adders }
    }

    /// Invokes every adder sequentially with the same operand pair and
    /// collects the results in registration order.
    pub fn run(&self, a: i64, b: i64) -> Result<SumReport> {
        if self.adders.is_empty() {
            return Err(ReportError::ConfigError {
                message: "no adders registered".to_string(),
            });
        }

        let mut results = Vec::with_capacity(self.adders.len());
        for adder in &self.adders {
            let result = adder.add(a, b);
            tracing::debug!("{}({}, {}) = {}", adder.name(), a, b, result);
            results.push(result);
        }

        Ok(SumReport::new(results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::adders::default_adders;

    #[test]
    fn test_run_collects_results_in_order() {
        let engine = ReportEngine::new(default_adders());
        let report = engine.run(32, 64).unwrap();
        assert_eq!(report.results, vec![96, 96, 96, 96]);
    }

    #[test]
    fn test_empty_adder_set_is_a_config_error() {
        let engine = ReportEngine::new(Vec::new());
        let err = engine.run(32, 64).unwrap_err();
        assert!(matches!(err, ReportError::ConfigError { .. }));
    }
}
