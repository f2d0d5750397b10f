//! Beep file to JSON converter

use beepc::beep::{reader, BeepJson};
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "beep2json")]
#[command(version = "0.1.0")]
#[command(about = "Convert beep files to JSON", long_about = None)]
struct Args {
    /// Input beep file
    input: PathBuf,

    /// Output JSON file (writes to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output compact JSON (default is pretty-printed)
    #[arg(short, long)]
    compact: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let text = std::fs::read_to_string(&args.input)?;
    let events = reader::parse(&text)?;
    let beep_json = BeepJson::new(events);

    let json_string = if args.compact {
        serde_json::to_string(&beep_json)?
    } else {
        serde_json::to_string_pretty(&beep_json)?
    };

    match args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(json_string.as_bytes())?;
            file.write_all(b"\n")?;
        }
        None => {
            println!("{}", json_string);
        }
    }

    Ok(())
}
