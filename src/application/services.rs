use crate::application::builders::account_builder::AccountConfigBuilder;
use crate::application::builders::profile_builder::ProfileBuilder;
use crate::domain::entities::{AccountConfig, GeneratedProfile, ProfileIds};
use crate::domain::errors::ProfileError;
use crate::domain::plist::PlistValue;
use crate::domain::value_objects::PayloadUuid;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Source of payload identifiers; swapped for fixed values in tests
#[cfg_attr(test, automock)]
pub trait IdGenerator {
    fn next_id(&self) -> PayloadUuid;
}

/// Turns a property-list tree into the bytes written to disk
pub trait PlistSerializer {
    fn serialize(&self, document: &PlistValue) -> Result<String, ProfileError>;
}

/// Destination for rendered profiles
#[cfg_attr(test, automock)]
pub trait ProfileWriter {
    /// Stores `contents` under `file_name`, returning the path written
    fn write(&self, file_name: &str, contents: &str) -> Result<PathBuf, ProfileError>;
}

/// Application service for the validate -> render -> write workflow
pub struct ProfileGenerationService {
    id_generator: Box<dyn IdGenerator>,
    serializer: Box<dyn PlistSerializer>,
    writer: Box<dyn ProfileWriter>,
}

impl ProfileGenerationService {
    pub fn new(
        id_generator: Box<dyn IdGenerator>,
        serializer: Box<dyn PlistSerializer>,
        writer: Box<dyn ProfileWriter>,
    ) -> Self {
        Self {
            id_generator,
            serializer,
            writer,
        }
    }

    /// Checks every required variable and builds the account
    pub fn validate(&self, entries: &HashMap<String, String>) -> Result<AccountConfig, ProfileError> {
        let account = AccountConfigBuilder::new(entries)
            .build()
            .inspect_err(|err| debug!(fields = ?err.fields(), "configuration rejected"))?;
        debug!(?account, "configuration validated");
        Ok(account)
    }

    /// Renders the profile with fresh identifiers and writes it out
    pub fn generate(&self, account: &AccountConfig) -> Result<GeneratedProfile, ProfileError> {
        let ids = ProfileIds {
            mail: self.id_generator.next_id(),
            root: self.id_generator.next_id(),
        };

        let document = self.render(account, &ids)?;
        let file_name = account.email_address.profile_file_name();
        let path = self.writer.write(&file_name, &document)?;

        let profile = GeneratedProfile {
            path,
            file_name,
            ids,
        };
        debug!(
            path = %profile.path.display(),
            mail_uuid = %profile.ids.mail,
            root_uuid = %profile.ids.root,
            bytes = document.len(),
            "profile written"
        );
        Ok(profile)
    }

    /// Pure rendering step: same account and ids always give the same document
    pub fn render(&self, account: &AccountConfig, ids: &ProfileIds) -> Result<String, ProfileError> {
        let tree = ProfileBuilder::new(account, ids).build();
        self.serializer.serialize(&tree)
    }
}
