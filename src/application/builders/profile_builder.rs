use crate::domain::entities::{AccountConfig, ProfileIds};
use crate::domain::plist::{PlistDict, PlistValue};

const ACCOUNT_TYPE_IMAP: &str = "EmailTypeIMAP";
const MAIL_PAYLOAD_TYPE: &str = "com.apple.mail.managed";
const MAIL_DISPLAY_NAME: &str = "Mail";
const ROOT_PAYLOAD_TYPE: &str = "Configuration";
const ROOT_DISPLAY_NAME: &str = "Email Account Profile";
const PAYLOAD_VERSION: i64 = 1;

/// Lays out an account as an Apple mail configuration profile.
///
/// The result is the root `<dict>` of the property list: one
/// `com.apple.mail.managed` payload wrapped in a `Configuration` payload.
pub struct ProfileBuilder<'a> {
    account: &'a AccountConfig,
    ids: &'a ProfileIds,
}

impl<'a> ProfileBuilder<'a> {
    pub fn new(account: &'a AccountConfig, ids: &'a ProfileIds) -> Self {
        Self { account, ids }
    }

    pub fn build(&self) -> PlistValue {
        let account = self.account;

        PlistDict::new()
            .insert(
                "PayloadContent",
                PlistValue::Array(vec![self.mail_payload().into()]),
            )
            .insert("PayloadDisplayName", ROOT_DISPLAY_NAME)
            .insert(
                "PayloadIdentifier",
                format!(
                    "{}.mailprofile.root.{}",
                    account.profile_domain, self.ids.root
                ),
            )
            .insert("PayloadOrganization", account.organization_name.as_str())
            .insert("PayloadRemovalDisallowed", false)
            .insert("PayloadType", ROOT_PAYLOAD_TYPE)
            .insert("PayloadUUID", self.ids.root.to_string())
            .insert("PayloadVersion", PAYLOAD_VERSION)
            .into()
    }

    fn mail_payload(&self) -> PlistDict {
        let account = self.account;
        let email = account.email_address.as_str();

        PlistDict::new()
            .insert("EmailAccountDescription", account.description.as_str())
            .insert("EmailAccountName", account.account_name.as_str())
            .insert("EmailAccountType", ACCOUNT_TYPE_IMAP)
            .insert("EmailAddress", email)
            .insert("IncomingMailServerHostName", account.mail_server.as_str())
            .insert(
                "IncomingMailServerPortNumber",
                i64::from(account.imap_port.get()),
            )
            .insert("IncomingMailServerUseSSL", account.imap_ssl)
            .insert("IncomingMailServerUsername", email)
            .insert("IncomingPassword", account.mail_password.as_str())
            .insert("OutgoingMailServerHostName", account.mail_server.as_str())
            .insert(
                "OutgoingMailServerPortNumber",
                i64::from(account.smtp_port.get()),
            )
            .insert("OutgoingMailServerUseSSL", account.smtp_ssl)
            .insert("OutgoingMailServerUsername", email)
            .insert("OutgoingPassword", account.mail_password.as_str())
            .insert("PayloadDisplayName", MAIL_DISPLAY_NAME)
            .insert(
                "PayloadIdentifier",
                format!("{}.mail.{}", account.profile_domain, self.ids.mail),
            )
            .insert("PayloadType", MAIL_PAYLOAD_TYPE)
            .insert("PayloadUUID", self.ids.mail.to_string())
            .insert("PayloadVersion", PAYLOAD_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{EmailAddress, Port};

    fn account() -> AccountConfig {
        AccountConfig {
            profile_domain: "com.acme".into(),
            organization_name: "Acme".into(),
            account_name: "Work".into(),
            email_address: EmailAddress::new("a.b@acme.com").unwrap(),
            mail_password: "secret".into(),
            mail_server: "mail.acme.com".into(),
            imap_port: Port::new(993).unwrap(),
            imap_ssl: true,
            smtp_port: Port::new(587).unwrap(),
            smtp_ssl: false,
            description: "Work Mail".into(),
        }
    }

    fn ids() -> ProfileIds {
        ProfileIds {
            mail: "11111111-2222-3333-4444-555555555555".parse().unwrap(),
            root: "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee".parse().unwrap(),
        }
    }

    fn as_dict(value: &PlistValue) -> &PlistDict {
        match value {
            PlistValue::Dict(dict) => dict,
            other => panic!("expected dict, got {:?}", other),
        }
    }

    fn mail_payload(root: &PlistDict) -> &PlistDict {
        match get(root, "PayloadContent") {
            Some(PlistValue::Array(items)) => {
                assert_eq!(items.len(), 1);
                as_dict(&items[0])
            }
            other => panic!("expected PayloadContent array, got {:?}", other),
        }
    }

    fn get<'d>(dict: &'d PlistDict, key: &str) -> Option<&'d PlistValue> {
        dict.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    fn string(value: &str) -> PlistValue {
        PlistValue::String(value.to_string())
    }

    #[test]
    fn root_carries_profile_metadata() {
        let account = account();
        let ids = ids();
        let tree = ProfileBuilder::new(&account, &ids).build();
        let root = as_dict(&tree);

        let keys: Vec<&str> = root.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                "PayloadContent",
                "PayloadDisplayName",
                "PayloadIdentifier",
                "PayloadOrganization",
                "PayloadRemovalDisallowed",
                "PayloadType",
                "PayloadUUID",
                "PayloadVersion",
            ]
        );
        assert_eq!(
            get(root, "PayloadIdentifier"),
            Some(&string(
                "com.acme.mailprofile.root.aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee"
            ))
        );
        assert_eq!(get(root, "PayloadOrganization"), Some(&string("Acme")));
        assert_eq!(
            get(root, "PayloadRemovalDisallowed"),
            Some(&PlistValue::Boolean(false))
        );
        assert_eq!(
            get(root, "PayloadUUID"),
            Some(&string("aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee"))
        );
        assert_eq!(get(root, "PayloadVersion"), Some(&PlistValue::Integer(1)));
    }

    #[test]
    fn mail_payload_maps_every_field() {
        let account = account();
        let ids = ids();
        let tree = ProfileBuilder::new(&account, &ids).build();
        let mail = mail_payload(as_dict(&tree));

        assert_eq!(mail.iter().count(), 19);
        assert_eq!(get(mail, "EmailAccountDescription"), Some(&string("Work Mail")));
        assert_eq!(get(mail, "EmailAccountName"), Some(&string("Work")));
        assert_eq!(get(mail, "EmailAccountType"), Some(&string("EmailTypeIMAP")));
        assert_eq!(get(mail, "EmailAddress"), Some(&string("a.b@acme.com")));
        assert_eq!(
            get(mail, "IncomingMailServerPortNumber"),
            Some(&PlistValue::Integer(993))
        );
        assert_eq!(
            get(mail, "IncomingMailServerUseSSL"),
            Some(&PlistValue::Boolean(true))
        );
        assert_eq!(
            get(mail, "OutgoingMailServerPortNumber"),
            Some(&PlistValue::Integer(587))
        );
        assert_eq!(
            get(mail, "OutgoingMailServerUseSSL"),
            Some(&PlistValue::Boolean(false))
        );
        assert_eq!(
            get(mail, "IncomingMailServerUsername"),
            Some(&string("a.b@acme.com"))
        );
        assert_eq!(
            get(mail, "OutgoingMailServerUsername"),
            Some(&string("a.b@acme.com"))
        );
        assert_eq!(get(mail, "IncomingPassword"), Some(&string("secret")));
        assert_eq!(get(mail, "OutgoingPassword"), Some(&string("secret")));
        assert_eq!(
            get(mail, "PayloadIdentifier"),
            Some(&string("com.acme.mail.11111111-2222-3333-4444-555555555555"))
        );
        assert_eq!(
            get(mail, "PayloadType"),
            Some(&string("com.apple.mail.managed"))
        );
    }

    #[test]
    fn build_is_deterministic_for_fixed_ids() {
        let account = account();
        let ids = ids();
        let builder = ProfileBuilder::new(&account, &ids);

        assert_eq!(builder.build(), builder.build());
    }
}
