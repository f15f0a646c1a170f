use clap::Parser;
use std::fs::{self, File};
use std::io::{self, prelude::*};
use std::path::PathBuf;
use tle_codec::{decode, decode_set, encode};
use tle_types::prelude::*;
use tracing::info;

/// Validate TLE files and rewrite them in canonical form
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Treat the input as a catalog of many element sets
    #[arg(short = 'c', long)]
    catalog: bool,

    /// Print the decoded records as JSON instead of TLE text
    #[arg(long)]
    json: bool,

    /// Output file path to write, stdout when not provided
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// TLE file to read
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let opts = Opts::parse();

    let content = fs::read_to_string(&opts.input)?;
    let records: Vec<TleRecord> = if opts.catalog {
        decode_set(&content)?
    } else {
        vec![decode(&content)?]
    };
    info!(
        input = %opts.input.display(),
        records = records.len(),
        "Decoded element sets"
    );

    let mut output: Box<dyn Write> = match &opts.output {
        Some(p) => Box::new(File::create(p)?),
        None => Box::new(io::stdout().lock()),
    };

    if opts.json {
        serde_json::to_writer_pretty(&mut output, &records)?;
        writeln!(output)?;
    } else {
        for tle in records.iter() {
            writeln!(output, "{}", encode(tle))?;
        }
    }

    Ok(())
}
