use std::fs::File;
use std::io::{stdin, BufReader, Write};

use anyhow::Result;
use clap::ArgAction;
use clap::Parser;
use colored::*;
use env_logger::Builder;
use log::info;

use aoc::genes::GenePool;
use aoc_timing::time;

#[derive(Debug, Parser)]
#[command(name = "aoc-day09")]
#[command(author, version, about = "Everybody Codes 2025 day 9: gene families")]
pub struct Cli {
    /// Input file (lines of `id:bases`), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Puzzle part to run (1-3); all parts by default
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=3))]
    pub part: Option<u8>,

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

fn read_input(input: &str) -> Result<GenePool> {
    if input == "-" {
        GenePool::parse(stdin().lock())
    } else {
        GenePool::parse(BufReader::new(File::open(input)?))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let pool = read_input(&cli.input)?;
    info!("Parsed {} genes", pool.len());

    let parts = match cli.part {
        Some(part) => vec![part],
        None => vec![1, 2, 3],
    };

    for part in parts {
        let (answer, timing) = match part {
            1 | 2 => time(|| pool.similarity_score()),
            _ => time(|| pool.largest_family_score()),
        };

        println!("Part {:02}: {}", part, answer.to_string().green());
        info!("Part {:02} took {}", part, timing.summary());
    }

    Ok(())
}
