// src/storage/mod.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use crate::extractors::{max_entity_columns, RelationRecord};
use crate::utils::error::StorageError;

/// Fixed key the raw input is stored under between runs.
pub const INPUT_STORAGE_KEY: &str = "seedRelationsInput";

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    fn input_path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.txt", INPUT_STORAGE_KEY))
    }

    /// Stores the raw input text verbatim, replacing any earlier input.
    pub fn save_input(&self, text: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.input_path();
        fs::write(&file_path, text)
            .map_err(StorageError::IoError)?;

        tracing::debug!("Saved input text ({} bytes) to {}", text.len(), file_path.display());
        Ok(file_path)
    }

    /// Returns the stored input text, or `None` if nothing was stored yet.
    pub fn load_input(&self) -> Result<Option<String>, StorageError> {
        let file_path = self.input_path();
        if !file_path.exists() {
            return Ok(None);
        }

        let text = fs::read_to_string(&file_path)
            .map_err(StorageError::IoError)?;
        tracing::debug!("Loaded stored input text from {}", file_path.display());
        Ok(Some(text))
    }

    /// Writes CSV text under `filename`
    pub fn save_csv(&self, filename: &str, csv: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(filename);
        fs::write(&file_path, csv)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved CSV to {}", file_path.display());
        Ok(file_path)
    }

    /// Writes the HTML preview under `filename`
    pub fn save_html(&self, filename: &str, html: &str) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(filename);
        fs::write(&file_path, html)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved HTML preview to {}", file_path.display());
        Ok(file_path)
    }

    /// Saves metadata about an export in JSON format
    pub fn save_metadata(&self, filename: &str, records: &[RelationRecord]) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(filename);

        let mut per_link_type: BTreeMap<&str, usize> = BTreeMap::new();
        for record in records {
            *per_link_type.entry(record.link_type).or_default() += 1;
        }

        let metadata = serde_json::json!({
            "person": records.first().map(|record| record.person.as_str()),
            "record_count": records.len(),
            "entity_columns": max_entity_columns(records),
            "records_per_link_type": per_link_type,
            "export_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str)
            .map_err(StorageError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::parse_relations;

    #[test]
    fn test_creates_missing_base_dir() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let nested = tmp.path().join("a").join("b");
        StorageManager::new(&nested).expect("storage");
        assert!(nested.is_dir());
    }

    #[test]
    fn test_input_round_trip_is_verbatim() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let storage = StorageManager::new(tmp.path()).expect("storage");

        assert_eq!(storage.load_input().expect("load"), None);

        let text = "Beroep\r\n01.01.1950 Smid  \n\n";
        let path = storage.save_input(text).expect("save");
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("seedRelationsInput.txt"));
        assert_eq!(storage.load_input().expect("load").as_deref(), Some(text));

        storage.save_input("Adres").expect("save");
        assert_eq!(storage.load_input().expect("load").as_deref(), Some("Adres"));
    }

    #[test]
    fn test_save_csv_and_html() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let storage = StorageManager::new(tmp.path()).expect("storage");

        let csv_path = storage.save_csv("relations.csv", "person,link_type,date").expect("csv");
        assert_eq!(fs::read_to_string(csv_path).expect("read"), "person,link_type,date");

        let html_path = storage.save_html("preview.html", "<html></html>").expect("html");
        assert!(html_path.ends_with("preview.html"));
    }

    #[test]
    fn test_metadata_contents() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let storage = StorageManager::new(tmp.path()).expect("storage");
        let records = parse_relations(
            "PEO_LastName=\"Janssens\"\nBeroep\n01.01.1950 Smid\n02.02.1951 Werkman (Gent)\nAdres\n03.03.1952 Kerkstraat 1",
        );

        let path = storage.save_metadata("relations_meta.json", &records).expect("metadata");
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).expect("read")).expect("json");

        assert_eq!(json["person"], "Janssens");
        assert_eq!(json["record_count"], 3);
        assert_eq!(json["entity_columns"], 2);
        assert_eq!(json["records_per_link_type"]["Beroep"], 2);
        assert_eq!(json["records_per_link_type"]["Adres"], 1);
        assert!(json["export_timestamp"].is_string());
    }
}
