// webui-embed: compile a web UI into a firmware header

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::process::ExitCode;

use webui_embed::cli::{Cli, render_summary};

fn run(cli: &Cli) -> Result<()> {
    let config = cli.to_config()?;
    let report = webui_embed::build(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_summary(&report));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
