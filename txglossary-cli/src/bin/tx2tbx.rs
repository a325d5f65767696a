use std::path::PathBuf;

use clap::Parser;
use txglossary::{Csv2Tbx, GlossaryRecord, Split, tbx::DEFAULT_PROGRAM, traits::Parser as _};
use txglossary_cli::{exit_with_error, init_logging};

/// Convert a Transifex glossary CSV to one TBX file per language.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file to parse
    #[arg(short, long)]
    file: PathBuf,

    /// Output directory
    #[arg(short, long)]
    out_dir: PathBuf,

    /// The csv2tbx executable run for every written CSV file
    #[arg(long, env = "CSV2TBX", default_value = DEFAULT_PROGRAM)]
    csv2tbx: PathBuf,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("Reading {}...", args.file.display());
    let converter = Csv2Tbx::new().with_program(&args.csv2tbx);
    let result = Split::<GlossaryRecord>::read_from(&args.file).and_then(|split| {
        split.write_all_with(&args.out_dir, |language, csv| {
            let tbx = converter.convert_beside(csv)?;
            println!("✅ {}: {} -> {}", language, csv.display(), tbx.display());
            Ok(())
        })
    });

    if let Err(e) = result {
        exit_with_error(&e);
    }
}
