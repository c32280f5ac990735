use crate::domain::entities::{AccountConfig, ConfigKey};
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::{EmailAddress, Port};
use std::collections::HashMap;
use tracing::warn;

/// Turns the raw `.env` mapping into an [`AccountConfig`].
///
/// Every key is checked before giving up, so the resulting
/// [`ValidationError`] names all offending variables at once.
pub struct AccountConfigBuilder<'a> {
    entries: &'a HashMap<String, String>,
    errors: ValidationError,
}

impl<'a> AccountConfigBuilder<'a> {
    pub fn new(entries: &'a HashMap<String, String>) -> Self {
        Self {
            entries,
            errors: ValidationError::default(),
        }
    }

    pub fn build(mut self) -> Result<AccountConfig, ValidationError> {
        let profile_domain = self.text(ConfigKey::ProfileDomain);
        let organization_name = self.text(ConfigKey::OrganizationName);
        let account_name = self.text(ConfigKey::EmailAccountName);
        let email_address = self.email(ConfigKey::EmailAddress);
        let mail_password = self.text(ConfigKey::MailPassword);
        let mail_server = self.text(ConfigKey::MailServer);
        let imap_port = self.port(ConfigKey::ImapPort);
        let imap_ssl = self.flag(ConfigKey::ImapSsl);
        let smtp_port = self.port(ConfigKey::SmtpPort);
        let smtp_ssl = self.flag(ConfigKey::SmtpSsl);
        let description = self.text(ConfigKey::EmailAccountDescription);

        let (
            Some(profile_domain),
            Some(organization_name),
            Some(account_name),
            Some(email_address),
            Some(mail_password),
            Some(mail_server),
            Some(imap_port),
            Some(imap_ssl),
            Some(smtp_port),
            Some(smtp_ssl),
            Some(description),
        ) = (
            profile_domain,
            organization_name,
            account_name,
            email_address,
            mail_password,
            mail_server,
            imap_port,
            imap_ssl,
            smtp_port,
            smtp_ssl,
            description,
        )
        else {
            return Err(self.errors);
        };

        Ok(AccountConfig {
            profile_domain,
            organization_name,
            account_name,
            email_address,
            mail_password,
            mail_server,
            imap_port,
            imap_ssl,
            smtp_port,
            smtp_ssl,
            description,
        })
    }

    /// Raw value for `key`; absent, empty and whitespace-only values are recorded as missing
    fn raw(&mut self, key: ConfigKey) -> Option<&'a str> {
        let entries = self.entries;
        match entries.get(key.as_str()) {
            Some(value) if !value.trim().is_empty() => Some(value.as_str()),
            _ => {
                self.errors.push_missing(key);
                None
            }
        }
    }

    fn text(&mut self, key: ConfigKey) -> Option<String> {
        self.raw(key).map(str::to_string)
    }

    fn email(&mut self, key: ConfigKey) -> Option<EmailAddress> {
        let value = self.raw(key)?;
        match EmailAddress::new(value) {
            Ok(email) => Some(email),
            Err(e) => {
                self.errors.push_malformed(key, value, e.to_string());
                None
            }
        }
    }

    fn port(&mut self, key: ConfigKey) -> Option<Port> {
        let value = self.raw(key)?;
        match value.parse::<Port>() {
            Ok(port) => Some(port),
            Err(e) => {
                self.errors.push_malformed(key, value, e.to_string());
                None
            }
        }
    }

    /// Only a case-insensitive `true` enables SSL; anything else means off
    fn flag(&mut self, key: ConfigKey) -> Option<bool> {
        let value = self.raw(key)?.trim();
        if value.eq_ignore_ascii_case("true") {
            return Some(true);
        }
        if !value.eq_ignore_ascii_case("false") {
            warn!(key = %key, value, "unrecognised SSL flag, treating it as false");
        }
        Some(false)
    }
}
