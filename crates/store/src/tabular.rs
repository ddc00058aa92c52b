//! CSV materialization of node and edge lists, for the visualization layer.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::dataset::StoreError;

/// Write `rows` as CSV with a header row derived from the field names.
/// Empty input writes nothing at all.
pub fn write_csv<T: Serialize>(path: impl AsRef<Path>, rows: &[T]) -> Result<(), StoreError> {
    let path = path.as_ref();

    if rows.is_empty() {
        tracing::info!(path = %path.display(), "no rows, skipping csv");
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = rows.len(), "wrote csv");
    Ok(())
}

/// Read back a CSV written by [`write_csv`].
pub fn read_csv<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>, StoreError> {
    let mut reader = csv::Reader::from_path(path.as_ref())?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
        party: String,
    }

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wikigraph-{name}-{}.csv", std::process::id()))
    }

    #[test]
    fn rows_round_trip_with_header() {
        let path = scratch_file("rows");
        let rows = vec![
            Row {
                name: "Alice".to_string(),
                party: "democratic".to_string(),
            },
            Row {
                name: "Smith, Jr.".to_string(),
                party: "republican".to_string(),
            },
        ];

        write_csv(&path, &rows).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("name,party\n"));

        let loaded: Vec<Row> = read_csv(&path).unwrap();
        assert_eq!(loaded, rows);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn empty_input_writes_no_file() {
        let path = scratch_file("empty");
        let rows: Vec<Row> = Vec::new();

        write_csv(&path, &rows).unwrap();

        assert!(!path.exists());
    }
}
