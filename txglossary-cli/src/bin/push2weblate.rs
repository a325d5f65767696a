use std::path::PathBuf;

use clap::Parser;
use txglossary::{
    Client, ClientConfig, ComponentPath, Error, PushEvent, config::DEFAULT_HOST, push_files_with,
};
use txglossary_cli::{exit_with_error, init_logging};

/// Upload translation files to a Weblate glossary component.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Translation files to upload, named after their language (e.g. de.csv)
    #[arg(short = 'i', long = "input", required = true, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Weblate API token
    #[arg(short, long, env = "WEBLATE_TOKEN", hide_env_values = true)]
    token: String,

    /// Weblate host, optionally with http:// or https://
    #[arg(short = 'H', long, env = "WEBLATE_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// The glossary component as {project}/{component_name}
    #[arg(short, long)]
    component: ComponentPath,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ClientConfig::new(args.token).with_host(args.host);
    let report = Client::new(config, args.component)
        .and_then(|client| push_files_with(&client, &args.files, print_event));

    match report {
        Ok(report) => println!("✅ Uploaded {} file(s) to {}", report.files.len(), report.web_url),
        Err(Error::NotAGlossary(component)) => {
            println!("Component {} is not a glossary", component);
            std::process::exit(1);
        }
        Err(e) => exit_with_error(&e),
    }
}

fn print_event(event: PushEvent<'_>) {
    match event {
        PushEvent::Component(component) => println!("Using component {}", component.web_url),
        PushEvent::Uploaded {
            file_name,
            language,
            method,
            response,
        } => println!(
            "Uploaded file {} (language {}, method {}): {}",
            file_name, language, method, response.status
        ),
    }
}
