mod application;
mod domain;
mod infrastructure;
mod presentation;

use clap::Parser;
use crate::application::services::ProfileGenerationService;
use crate::infrastructure::config::EnvFileLoader;
use crate::infrastructure::file_writer::FsProfileWriter;
use crate::infrastructure::plist_writer::XmlPlistSerializer;
use crate::infrastructure::uuid_generator::RandomIdGenerator;
use crate::presentation::cli::Cli;
use tracing_subscriber::EnvFilter;

/// mobileconfig-gen: turn a .env file into an Apple Mail configuration profile
///
/// Reads IMAP/SMTP account settings, validates them, and writes a
/// `.mobileconfig` named after the email address into the current directory.
/// Set `RUST_LOG=debug` to trace each stage on stderr.
fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let loader = EnvFileLoader::from_process_env().override_existing(false);
    let service = ProfileGenerationService::new(
        Box::new(RandomIdGenerator),
        Box::new(XmlPlistSerializer),
        Box::new(FsProfileWriter::current_dir()),
    );

    if let Err(err) = cli.run(&loader, &service, &mut std::io::stdout().lock()) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
