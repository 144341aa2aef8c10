use clap::Parser;
use rask_log_chain::{Config, LogEntry, telemetry};
use std::io::{self, BufRead};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    telemetry::init_tracing()?;

    let config = Config::parse();
    let mut chain = config.build_chain()?;
    info!(file = %config.file_path.display(), sinks = chain.len(), "log chain ready");

    // Each stdin line becomes an Information entry; everything is saved at EOF.
    for line in io::stdin().lock().lines() {
        chain.log(LogEntry::information(line?))?;
    }
    chain.save()?;

    info!("log chain saved");
    Ok(())
}
