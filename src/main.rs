use std::io;

use quadsum::utils::logger;
use quadsum::{default_adders, ReportEngine};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger();

    tracing::info!("Starting quadsum");

    let engine = ReportEngine::new(default_adders());
    let report = engine.run(32, 64)?;

    report.write_line(&mut io::stdout().lock())?;

    Ok(())
}
