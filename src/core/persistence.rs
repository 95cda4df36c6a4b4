use crate::core::Storage;
use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// One JSON array file holding a whole collection.
#[derive(Debug, Clone)]
pub struct JsonFile<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> JsonFile<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    /// Reads the collection. Absent or unreadable files yield an empty one.
    pub fn load<T: DeserializeOwned>(&self) -> Vec<T> {
        let bytes = match self.storage.read_file(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.is_not_found() => {
                tracing::debug!("{} does not exist yet, starting empty", self.path);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Could not read {}: {}, starting empty", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<T>>(&bytes) {
            Ok(records) => {
                tracing::debug!("Loaded {} records from {}", records.len(), self.path);
                records
            }
            Err(e) => {
                tracing::warn!("{} is not valid JSON ({}), starting empty", self.path, e);
                Vec::new()
            }
        }
    }

    /// Rewrites the whole file.
    pub fn save<T: Serialize>(&self, records: &[T]) -> Result<()> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        records.serialize(&mut serializer)?;

        self.storage.write_file(&self.path, &buffer)?;
        tracing::debug!("Saved {} records to {}", records.len(), self.path);
        Ok(())
    }
}
