use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spdlog::{error, info, warn};

use kambas::logger::configure_logger;
use kambas::site::builder::build_site;

use crate::config::open_config;
use crate::config_data::write_sample_cfg;

mod config;
mod config_data;

const CFG_FILE_NAME: &str = "kambas.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
enum Args {
    /// Generates the site from posts, events and members
    Build(BuildArgs),
    /// Writes a sample configuration file
    SampleConfig(SampleConfigArgs),
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Config path. If empty, kambas.toml is searched in the executable, current and user config directories
    #[arg(short, long)]
    config_path: Option<String>,
}

#[derive(Parser, Debug)]
struct SampleConfigArgs {
    /// Where the sample configuration is written
    #[arg(short, long, default_value_t = CFG_FILE_NAME.to_string())]
    out: String,
}

fn build_cmd(args: BuildArgs) -> Result<()> {
    let config = open_config(args.config_path.map(PathBuf::from))?;

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Starting build =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
    match build_site(&config) {
        Ok(_) => Ok(()),
        Err(err) => {
            error!("Build failed: {:#}", err);
            Err(err)
        }
    }
}

fn sample_config_cmd(args: SampleConfigArgs) -> Result<()> {
    let path = PathBuf::from(&args.out);
    println!("Writing sample config to {}", path.display());
    write_sample_cfg(&path).with_context(|| format!("Error writing {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args {
        Args::Build(args) => build_cmd(args),
        Args::SampleConfig(args) => sample_config_cmd(args),
    }
}
