use crate::domain::entities::{AccountConfig, GeneratedProfile};
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

const LABEL_WIDTH: usize = 19;

/// Prints the outcome of a run.
///
/// Verbose mode lists every field except the password; otherwise a single
/// confirmation line names the file.
pub fn print_summary<W: Write>(
    out: &mut W,
    account: &AccountConfig,
    profile: &GeneratedProfile,
    verbose: bool,
) -> Result<()> {
    if !verbose {
        writeln!(out, "Generated {}", profile.file_name.green())?;
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        "Generated .mobileconfig with the following parameters:".green()
    )?;
    let fields = [
        ("Profile Domain", account.profile_domain.clone()),
        ("Organization Name", account.organization_name.clone()),
        ("Email Name", account.account_name.clone()),
        ("Email Address", account.email_address.to_string()),
        ("Server", account.mail_server.clone()),
        (
            "IMAP Port/SSL",
            format!("{} / {}", account.imap_port, account.imap_ssl),
        ),
        (
            "SMTP Port/SSL",
            format!("{} / {}", account.smtp_port, account.smtp_ssl),
        ),
        ("Output file", profile.file_name.clone()),
    ];
    for (label, value) in fields {
        writeln!(
            out,
            "  {}: {}",
            format!("{:<width$}", label, width = LABEL_WIDTH).cyan(),
            value
        )?;
    }
    Ok(())
}
