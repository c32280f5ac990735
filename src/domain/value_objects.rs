use anyhow::{anyhow, Result};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// File extension Apple devices recognise as a configuration profile
pub const PROFILE_EXTENSION: &str = "mobileconfig";

/// Represents a validated TCP port (1-65535)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Port(u16);

impl Port {
    /// Creates a new Port with validation
    ///
    /// # Arguments
    /// * `port` - The port number
    ///
    /// # Returns
    /// * `Ok(Port)` - Validated port
    /// * `Err(anyhow::Error)` - If the port is zero
    pub fn new(port: u16) -> Result<Self> {
        if port == 0 {
            return Err(anyhow!("port must be between 1 and 65535"));
        }
        Ok(Port(port))
    }

    pub fn get(&self) -> u16 {
        self.0
    }
}

impl FromStr for Port {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .trim()
            .parse::<u16>()
            .map_err(|_| anyhow!("not a port number between 1 and 65535"))?;
        Port::new(number)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents the account's email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a new EmailAddress, rejecting blank input
    pub fn new(address: &str) -> Result<Self> {
        let address = address.trim();
        if address.is_empty() {
            return Err(anyhow!("email address cannot be empty"));
        }
        Ok(EmailAddress(address.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the profile file for this address: every `@` becomes `_`
    ///
    /// `a.b@acme.com` -> `a.b_acme.com.mobileconfig`
    pub fn profile_file_name(&self) -> String {
        format!("{}.{}", self.0.replace('@', "_"), PROFILE_EXTENSION)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a payload identifier, rendered as lowercase hyphenated hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayloadUuid(Uuid);

impl From<Uuid> for PayloadUuid {
    fn from(uuid: Uuid) -> Self {
        PayloadUuid(uuid)
    }
}

impl FromStr for PayloadUuid {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::parse_str(s).map_err(|e| anyhow!("Invalid UUID: {}", e))?;
        Ok(PayloadUuid(uuid))
    }
}

impl fmt::Display for PayloadUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_accepts_full_range() {
        assert_eq!("1".parse::<Port>().unwrap().get(), 1);
        assert_eq!("65535".parse::<Port>().unwrap().get(), 65535);
        assert_eq!(" 993 ".parse::<Port>().unwrap().get(), 993);
    }

    #[test]
    fn port_rejects_garbage_and_out_of_range() {
        assert!("abc".parse::<Port>().is_err());
        assert!("0".parse::<Port>().is_err());
        assert!("65536".parse::<Port>().is_err());
        assert!("-1".parse::<Port>().is_err());
        assert!("993.0".parse::<Port>().is_err());
    }

    #[test]
    fn profile_file_name_replaces_every_at_sign() {
        let email = EmailAddress::new("a.b@acme.com").unwrap();
        assert_eq!(email.profile_file_name(), "a.b_acme.com.mobileconfig");

        let odd = EmailAddress::new("\"x@y\"@acme.com").unwrap();
        assert_eq!(odd.profile_file_name(), "\"x_y\"_acme.com.mobileconfig");
    }

    #[test]
    fn email_rejects_blank() {
        assert!(EmailAddress::new("   ").is_err());
    }

    #[test]
    fn email_drops_surrounding_whitespace() {
        let email = EmailAddress::new("  a.b@acme.com\t").unwrap();
        assert_eq!(email.as_str(), "a.b@acme.com");
        assert_eq!(email.profile_file_name(), "a.b_acme.com.mobileconfig");
    }

    #[test]
    fn payload_uuid_displays_lowercase_hyphenated() {
        let id: PayloadUuid = "6F9619FF-8B86-D011-B42D-00CF4FC964FF".parse().unwrap();
        assert_eq!(id.to_string(), "6f9619ff-8b86-d011-b42d-00cf4fc964ff");
    }
}
