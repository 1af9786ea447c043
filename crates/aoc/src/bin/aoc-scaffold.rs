use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::ArgAction;
use clap::Parser;
use env_logger::Builder;
use log::info;

use aoc::scaffold::Scaffold;

#[derive(Debug, Parser)]
#[command(name = "aoc-scaffold")]
#[command(author, version, about = "Generate the folder layout for a new puzzle day")]
pub struct Cli {
    /// Year of the event, e.g. 2025
    #[arg(short, long)]
    pub year: u16,

    /// Day of the event (1-25)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Root directory the solution folders live under
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let scaffold = Scaffold::new(cli.root, cli.year, cli.day);
    info!("Scaffolding {}", scaffold.day_dir().display());
    scaffold.create()?;

    Ok(())
}
