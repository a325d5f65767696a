//! Shared plumbing for the txglossary command-line tools.

pub mod logging;

pub use logging::init_logging;
pub use txglossary::Error;

/// Prints `err` the way every tool reports fatal errors and exits with status 1.
pub fn exit_with_error(err: &Error) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}
