//! Cached query responses named `<prefix>-YYYY-MM-DDTHH-MM-SSz.xml`

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{Error, Result};

/// File name prefix used when saving fetched documents
pub(crate) const CACHE_PREFIX: &str = "pskr";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%Sz";
const TIMESTAMP_LEN: usize = 20;

/// A cached document and the instant embedded in its name
#[derive(Debug, Clone)]
pub(crate) struct XmlFile {
    pub(crate) path: PathBuf,
    pub(crate) timestamp: DateTime<Utc>,
}

/// Extract the UTC timestamp embedded in a cached file name
pub(crate) fn timestamp_from_filename(name: &str) -> Result<DateTime<Utc>> {
    let invalid = || Error::Timestamp(name.to_string());

    let stem = name.strip_suffix(".xml").ok_or_else(invalid)?;
    let start = stem.len().checked_sub(TIMESTAMP_LEN).ok_or_else(invalid)?;
    let ts = stem.get(start..).ok_or_else(invalid)?;

    NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| invalid())
}

pub(crate) fn cache_file_name(prefix: &str, timestamp: DateTime<Utc>) -> String {
    format!("{}-{}.xml", prefix, timestamp.format(TIMESTAMP_FORMAT))
}

/// List timestamped XML files in a directory, oldest first.
///
/// Files whose names carry no timestamp are ignored.
pub(crate) fn list_xml_files(dir: &Path) -> Result<Vec<XmlFile>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir.display().to_string(), e))?;

    let mut files: Vec<XmlFile> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            let timestamp = timestamp_from_filename(name).ok()?;
            Some(XmlFile { path, timestamp })
        })
        .collect();

    files.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.path.cmp(&b.path)));
    Ok(files)
}

pub(crate) fn read_xml_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path.display().to_string(), e))
}

/// Store a fetched document so it can be replayed later
pub(crate) fn save_xml(dir: &Path, timestamp: DateTime<Utc>, body: &str) -> Result<PathBuf> {
    let path = dir.join(cache_file_name(CACHE_PREFIX, timestamp));
    fs::write(&path, body).map_err(|e| Error::io(path.display().to_string(), e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_from_filename() {
        let ts = timestamp_from_filename("pskr-2025-06-14T18-05-00z.xml").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2025, 6, 14, 18, 5, 0).unwrap());
    }

    #[test]
    fn test_timestamp_with_dashed_prefix() {
        let ts = timestamp_from_filename("my-station-data-2024-01-02T03-04-05z.xml").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap());
    }

    #[test]
    fn test_timestamp_rejects_bad_names() {
        assert!(timestamp_from_filename("pskr-2025-06-14T18-05-00z.txt").is_err());
        assert!(timestamp_from_filename("notes.xml").is_err());
        assert!(timestamp_from_filename("pskr-2025-13-14T18-05-00z.xml").is_err());
        assert!(timestamp_from_filename("pskr-2025-06-14T18:05:00z.xml").is_err());
    }

    #[test]
    fn test_cache_file_name_parses_back() {
        let ts = Utc.with_ymd_and_hms(2023, 11, 5, 23, 59, 1).unwrap();
        let name = cache_file_name(CACHE_PREFIX, ts);
        assert_eq!(name, "pskr-2023-11-05T23-59-01z.xml");
        assert_eq!(timestamp_from_filename(&name).unwrap(), ts);
    }

    #[test]
    fn test_list_xml_files_sorted() {
        let dir = tempfile::TempDir::new().unwrap();
        for name in [
            "pskr-2025-06-14T18-10-00z.xml",
            "pskr-2025-06-14T18-00-00z.xml",
            "readme.xml",
            "pskr-2025-06-14T18-05-00z.xml",
        ] {
            fs::write(dir.path().join(name), "<receptionReports/>").unwrap();
        }

        let files = list_xml_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "pskr-2025-06-14T18-00-00z.xml",
                "pskr-2025-06-14T18-05-00z.xml",
                "pskr-2025-06-14T18-10-00z.xml",
            ]
        );
    }

    #[test]
    fn test_list_missing_dir_is_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(list_xml_files(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_save_xml_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let ts = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let path = save_xml(dir.path(), ts, "<receptionReports/>").unwrap();
        assert_eq!(read_xml_file(&path).unwrap(), "<receptionReports/>");
        assert_eq!(list_xml_files(dir.path()).unwrap().len(), 1);
    }
}
