use anyhow::Result;
use netusage::{output, pipeline};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) locate input and output ──────────────────────────────────
    let input = Path::new("internet_usage.csv");
    let out_dir = Path::new(".");

    // ─── 3) run the pipeline ─────────────────────────────────────────
    let run = pipeline::run(input)?;

    // ─── 4) report country codes with no continent ───────────────────
    if run.unmapped.is_empty() {
        info!("all country codes mapped to a continent");
    } else {
        for entry in &run.unmapped {
            warn!(
                "no continent for {} ({}): {} rows",
                entry.country_name, entry.country_code, entry.records
            );
        }
    }

    // ─── 5) write tables and the summary chart ───────────────────────
    output::table::write_all(&run, out_dir)?;
    output::chart::render(
        out_dir.join(output::chart::SUMMARY_CHART),
        &run.average_per_year,
        &run.top_countries,
    )?;

    info!("all done");
    Ok(())
}
