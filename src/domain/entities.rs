use crate::domain::value_objects::{EmailAddress, PayloadUuid, Port};
use std::fmt;
use std::path::PathBuf;

/// Keys read from the `.env` file, in the order they are validated and reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    ProfileDomain,
    OrganizationName,
    EmailAccountName,
    EmailAddress,
    MailPassword,
    MailServer,
    ImapPort,
    ImapSsl,
    SmtpPort,
    SmtpSsl,
    EmailAccountDescription,
}

impl ConfigKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::ProfileDomain => "PROFILE_DOMAIN",
            ConfigKey::OrganizationName => "ORGANIZATION_NAME",
            ConfigKey::EmailAccountName => "EMAIL_ACCOUNT_NAME",
            ConfigKey::EmailAddress => "EMAIL_ADDRESS",
            ConfigKey::MailPassword => "MAIL_PASSWORD",
            ConfigKey::MailServer => "MAIL_SERVER",
            ConfigKey::ImapPort => "IMAP_PORT",
            ConfigKey::ImapSsl => "IMAP_SSL",
            ConfigKey::SmtpPort => "SMTP_PORT",
            ConfigKey::SmtpSsl => "SMTP_SSL",
            ConfigKey::EmailAccountDescription => "EMAIL_ACCOUNT_DESCRIPTION",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated IMAP/SMTP account, ready to be rendered into a profile
#[derive(Clone)]
pub struct AccountConfig {
    pub profile_domain: String,
    pub organization_name: String,
    pub account_name: String,
    pub email_address: EmailAddress,
    pub mail_password: String,
    pub mail_server: String,
    pub imap_port: Port,
    pub imap_ssl: bool,
    pub smtp_port: Port,
    pub smtp_ssl: bool,
    pub description: String,
}

impl fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountConfig")
            .field("profile_domain", &self.profile_domain)
            .field("organization_name", &self.organization_name)
            .field("account_name", &self.account_name)
            .field("email_address", &self.email_address)
            .field("mail_password", &"<redacted>")
            .field("mail_server", &self.mail_server)
            .field("imap_port", &self.imap_port)
            .field("imap_ssl", &self.imap_ssl)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_ssl", &self.smtp_ssl)
            .field("description", &self.description)
            .finish()
    }
}

/// The pair of payload identifiers minted for a single profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileIds {
    pub mail: PayloadUuid,
    pub root: PayloadUuid,
}

/// Outcome of a successful generation run
#[derive(Debug, Clone)]
pub struct GeneratedProfile {
    pub path: PathBuf,
    pub file_name: String,
    pub ids: ProfileIds,
}
