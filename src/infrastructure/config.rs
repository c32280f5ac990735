use crate::domain::errors::ProfileError;
use std::collections::HashMap;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use tracing::debug;

/// Default configuration source, looked up relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Reads `KEY=VALUE` files into a plain mapping.
///
/// The process environment is never modified. Instead the loader starts from
/// a snapshot of the ambient variables and layers the file on top; variables
/// already present in the snapshot win unless `override_existing` is set.
#[derive(Debug, Clone, Default)]
pub struct EnvFileLoader {
    ambient: HashMap<String, String>,
    override_existing: bool,
}

impl EnvFileLoader {
    pub fn new(ambient: HashMap<String, String>) -> Self {
        Self {
            ambient,
            override_existing: false,
        }
    }

    /// Loader seeded with the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are left out rather
    /// than aborting the run; none of the required keys can be spelled that way.
    pub fn from_process_env() -> Self {
        Self::new(utf8_vars(std::env::vars_os()))
    }

    pub fn override_existing(mut self, override_existing: bool) -> Self {
        self.override_existing = override_existing;
        self
    }

    pub fn load(&self, path: &Path) -> Result<HashMap<String, String>, ProfileError> {
        if !path.is_file() {
            return Err(ProfileError::ConfigNotFound {
                path: path.to_path_buf(),
                source: dotenvy::Error::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    "no such file",
                )),
            });
        }

        let not_found = |source: dotenvy::Error| match source {
            dotenvy::Error::LineParse(line, index) => ProfileError::ConfigParse {
                path: path.to_path_buf(),
                line,
                index,
            },
            source => ProfileError::ConfigNotFound {
                path: path.to_path_buf(),
                source,
            },
        };

        let mut entries = self.ambient.clone();
        let mut from_file = 0usize;
        for item in dotenvy::from_path_iter(path).map_err(not_found)? {
            let (key, value) = item.map_err(not_found)?;
            from_file += 1;
            if self.override_existing || !entries.contains_key(&key) {
                entries.insert(key, value);
            } else {
                debug!(%key, "keeping value from the environment");
            }
        }

        debug!(path = %path.display(), entries = from_file, "loaded configuration file");
        Ok(entries)
    }
}

fn utf8_vars<I>(vars: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (Ok(key), Err(_)) => {
                debug!(%key, "skipping environment variable with a non UTF-8 value");
                None
            }
            (Err(raw), _) => {
                debug!(key = %raw.to_string_lossy(), "skipping environment variable with a non UTF-8 name");
                None
            }
        })
        .collect()
}
