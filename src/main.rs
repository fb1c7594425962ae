use cell_manager::{cli::Args, prelude::*};
use clap::{Parser, crate_version};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    Args::parse().run()?;

    info!("done!");
    Ok(())
}
