use anyhow::Context;

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = gildedrose_cli::DemoConfig::from_env().context("failed to load configuration")?;

    tracing::info!(
        days = config.days,
        items = config.items.len(),
        format = ?config.format,
        "starting simulation"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    gildedrose_cli::run(&config, &mut out).context("failed to write report")?;

    Ok(())
}
