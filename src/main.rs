use beepc::compiler::encode::RestMode;
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "beepc")]
#[command(version = "0.1.0")]
#[command(about = "Piano letter notation to beep-file compiler", long_about = None)]
struct Args {
    /// Output beep file (writes to stdout if not specified)
    output: Option<PathBuf>,

    /// Input notation file (reads from stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Treat the input as a saved letter-notes web page and strip markup
    #[arg(long)]
    html: bool,

    /// Encode rests as explicit pauses instead of holding the note
    #[arg(short, long)]
    pauses: bool,

    /// Time slot interval in milliseconds
    #[arg(short = 't', long = "time", default_value_t = beepc::compiler::DEFAULT_INTERVAL_MS)]
    interval: u32,

    /// Maximum output length in milliseconds (0 = unbounded)
    #[arg(short, long, default_value_t = 0)]
    limit: u32,

    /// Emit the final pending note or pause instead of dropping it
    #[arg(long)]
    flush_tail: bool,
}

fn main() -> Result<(), beepc::Error> {
    let args = Args::parse();

    let mut text = beepc::source::fetch_notation_text(args.input.as_deref())?;
    if args.html {
        text = beepc::source::extract_notation(&text);
    }

    let mut compiler = beepc::Compiler::new();
    compiler.rest_mode = if args.pauses {
        RestMode::Pause
    } else {
        RestMode::Hold
    };
    compiler.interval_ms = args.interval;
    compiler.limit_ms = args.limit;
    compiler.flush_tail = args.flush_tail;

    let song = compiler.compile(&text)?;

    match &args.output {
        Some(path) => fs::write(path, song)?,
        None => println!("{}", song),
    }

    Ok(())
}
