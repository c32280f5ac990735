use crate::application::services::ProfileGenerationService;
use crate::domain::entities::GeneratedProfile;
use crate::infrastructure::config::{DEFAULT_ENV_FILE, EnvFileLoader};
use crate::infrastructure::output::print_summary;
use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// CLI configuration for mobileconfig-gen
#[derive(Parser, Debug)]
#[command(name = "mobileconfig-gen", version = "0.1.0")]
#[command(about = "Generate a .mobileconfig profile for Mail on iOS/macOS", long_about = None)]
pub struct Cli {
    /// Path to the .env file holding the account settings
    #[arg(short, long, default_value = DEFAULT_ENV_FILE)]
    pub env: PathBuf,

    /// Print details as the profile is generated
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run<W: Write>(
        &self,
        loader: &EnvFileLoader,
        service: &ProfileGenerationService,
        out: &mut W,
    ) -> Result<GeneratedProfile> {
        let entries = loader.load(&self.env)?;
        let account = service.validate(&entries)?;
        let profile = service.generate(&account)?;

        print_summary(out, &account, &profile, self.verbose)?;
        Ok(profile)
    }
}
