use std::io::{self, Write};

use anyhow::Context;

use tally_app::{AppConfig, SampleCatalog, run_reports};
use tally_products::CodeRegistry;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to read configuration")?;
    tally_observability::init(config.log_format);

    tracing::info!(output = ?config.output, code = %config.code, "running catalog reports");

    let catalog = SampleCatalog::reference().context("failed to build the reference catalog")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run_reports(&catalog, CodeRegistry::global(), &config, &mut out)?;
    out.flush()?;
    Ok(())
}
