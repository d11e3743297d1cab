//! Raw collector CSV: the four-column `{author, text, publishedAt, likes}`
//! artifact written once per video and overwritten on re-runs.

use std::path::Path;

use vclens_core::CommentRecord;

use crate::error::StoreError;

/// Write the raw collector output, replacing any previous file.
///
/// Creates the parent directory if needed.
///
/// # Errors
///
/// Returns [`StoreError::Io`] or [`StoreError::Csv`] on write failure.
pub fn write_raw_comments(path: &Path, records: &[CommentRecord]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| StoreError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;

    for record in records {
        writer.serialize(record).map_err(|e| StoreError::Csv {
            path: path.display().to_string(),
            source: e,
        })?;
    }

    writer.flush().map_err(|e| StoreError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Read a raw collector CSV back into records.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if the file does not exist, otherwise
/// [`StoreError::Csv`] on read/parse failure.
pub fn read_raw_comments(path: &Path) -> Result<Vec<CommentRecord>, StoreError> {
    if !path.exists() {
        return Err(StoreError::NotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|e| StoreError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: CommentRecord = result.map_err(|e| StoreError::Csv {
            path: path.display().to_string(),
            source: e,
        })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(author: &str, likes: Option<i64>) -> CommentRecord {
        CommentRecord {
            author: author.to_string(),
            text: format!("comment from {author}"),
            published_at: "2024-05-01T10:00:00Z".to_string(),
            likes,
        }
    }

    #[test]
    fn raw_csv_round_trips_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("video_raw.csv");

        let records = vec![record("alice", Some(3)), record("bob", None)];
        write_raw_comments(&path, &records).expect("write");

        let loaded = read_raw_comments(&path).expect("read");
        assert_eq!(loaded, records);
    }

    #[test]
    fn missing_likes_serializes_as_empty_field() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("video_raw.csv");

        write_raw_comments(&path, &[record("alice", None)]).expect("write");

        let content = std::fs::read_to_string(&path).expect("read file");
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("author,text,publishedAt,likes"));
        let row = lines.next().expect("data row");
        assert!(row.ends_with(','), "null likes should be empty, got: {row}");
    }

    #[test]
    fn rerun_overwrites_prior_output() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("video_raw.csv");

        write_raw_comments(&path, &[record("alice", Some(1)), record("bob", Some(2))])
            .expect("first write");
        write_raw_comments(&path, &[record("carol", Some(3))]).expect("second write");

        let loaded = read_raw_comments(&path).expect("read");
        assert_eq!(loaded.len(), 1, "second run must replace the first");
        assert_eq!(loaded[0].author, "carol");
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = read_raw_comments(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }
}
