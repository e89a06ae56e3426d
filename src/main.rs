mod args;

use anyhow::Result;
use clap::Parser;
use log::error;
use std::io;
use std::process::ExitCode;

use crate::args::Args;
use rg_quote::config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logger();

    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    // no config is read and nothing is requested without a symbol
    let symbol = args.symbol()?;

    let config = config::load_env(&args.env_file)?;

    // a rejected quote has already been logged; it still exits cleanly
    rg_quote::run(&config, symbol, io::stdout()).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
