use std::path::PathBuf;

use clap::Parser;
use txglossary::{Split, TranslationMemoryRecord, traits::Parser as _};
use txglossary_cli::{exit_with_error, init_logging};

/// Convert a Transifex glossary CSV to per-language CSV files for Weblate.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file to parse
    #[arg(short, long)]
    file: PathBuf,

    /// Output directory
    #[arg(short, long)]
    out_dir: PathBuf,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("Reading {}...", args.file.display());
    let written = Split::<TranslationMemoryRecord>::read_from(&args.file)
        .and_then(|split| split.write_all(&args.out_dir));

    match written {
        Ok(paths) => {
            for path in paths {
                println!("✅ {}", path.display());
            }
        }
        Err(e) => exit_with_error(&e),
    }
}
