//! Properties store
//!
//! `PropertiesStore` loads a key/value configuration from a single backing
//! file, fills in missing keys from the embedded defaults, creates the file
//! with the defaults when it is absent, and persists updated maps back.
//!
//! Nothing here fails the caller: reads degrade to the defaults and write
//! failures are logged and swallowed. `load` reports which of the two
//! happened for callers that need to tell them apart.

mod defaults;
mod merge;

pub use defaults::{
    defaults, ACCESS_TOKEN, CONSUMER_KEY, JIRA_HOME, PRIVATE_KEY, REQUEST_TOKEN, SECRET,
};

use crate::error::StoreError;
use crate::properties;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

const PROP_FILE_NAME: &str = "config.properties";

/// Why a load fell back to the embedded defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultsReason {
    /// No file at the backing path. A default file was created best-effort.
    FileMissing,
    /// The file exists but could not be read or parsed. It was left untouched.
    Unreadable(String),
}

/// Where a returned map came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the backing file, defaults merged in for absent keys.
    File,
    /// Copy of the embedded defaults.
    Defaults(DefaultsReason),
}

/// Result of a load: the usable map plus its provenance.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub properties: HashMap<String, String>,
    pub source: LoadSource,
}

/// Store over one property file.
///
/// Stateless apart from the backing path; every operation re-reads or
/// rewrites the file. No locking: concurrent access from multiple threads or
/// processes can race.
pub struct PropertiesStore {
    path: PathBuf,
}

impl Default for PropertiesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertiesStore {
    /// Store over `./config.properties` in the process working directory.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(".").join(PROP_FILE_NAME),
        }
    }

    /// Store over an explicit backing path.
    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the backing file, falling back to the embedded defaults.
    ///
    /// A missing file triggers best-effort creation of a default file. Any
    /// other read failure leaves the file untouched. Never fails; the report
    /// carries the provenance of the returned map.
    pub fn load(&self) -> LoadReport {
        match self.try_read() {
            Ok(mut loaded) => {
                merge::fill_missing(&mut loaded, defaults());
                LoadReport {
                    properties: loaded,
                    source: LoadSource::File,
                }
            }
            Err(StoreError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                self.create_default_file_if_absent();
                LoadReport {
                    properties: defaults().clone(),
                    source: LoadSource::Defaults(DefaultsReason::FileMissing),
                }
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    "Failed to read properties, using defaults: {}", e
                );
                LoadReport {
                    properties: defaults().clone(),
                    source: LoadSource::Defaults(DefaultsReason::Unreadable(e.to_string())),
                }
            }
        }
    }

    /// Loaded map, or a copy of the defaults when the file is missing or
    /// unreadable. Always contains every defaulted key.
    pub fn get_or_defaults(&self) -> HashMap<String, String> {
        self.load().properties
    }

    /// Overwrite the backing file with `properties`, truncating any prior
    /// content. Failures are logged and swallowed.
    pub fn save(&self, properties: &HashMap<String, String>) {
        if let Err(e) = self.try_save(properties) {
            error!(
                path = %self.path.display(),
                "Failed to save properties: {}", e
            );
        }
    }

    /// Create the backing file populated with the defaults, only if no file
    /// exists yet. An existing file is left untouched; creation failure is a
    /// silent no-op. Idempotent.
    pub fn create_default_file_if_absent(&self) {
        // is_ok() drops the handle; save reopens the path itself.
        let created = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .is_ok();
        if created {
            info!(path = %self.path.display(), "Creating default properties file");
            self.save(defaults());
        }
    }

    fn try_read(&self) -> Result<HashMap<String, String>, StoreError> {
        let text = fs::read_to_string(&self.path)?;
        properties::parse(&text)
    }

    fn try_save(&self, properties: &HashMap<String, String>) -> Result<(), StoreError> {
        fs::write(&self.path, properties::to_string(properties))?;
        Ok(())
    }
}
