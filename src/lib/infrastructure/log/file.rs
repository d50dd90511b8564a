//! File-backed delivery log

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::campaign::{
    errors::DeliveryLogError,
    log::{DeliveryLog, DeliveryLogEntry},
};

/// Append-only CSV delivery log, one line per confirmed send.
///
/// The file is opened per append, mirroring how the log is only touched
/// inside the success path of a dispatch iteration.
#[derive(Debug, Clone)]
pub struct FileDeliveryLog {
    path: PathBuf,
}

impl FileDeliveryLog {
    /// Create a log writing to the given path; the file is created on the
    /// first append
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The path entries are appended to
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeliveryLog for FileDeliveryLog {
    fn record(&self, entry: &DeliveryLogEntry) -> Result<(), DeliveryLogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{}", entry.to_csv_line())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use testresult::TestResult;

    use super::*;

    fn entry(recipient: &str) -> DeliveryLogEntry {
        DeliveryLogEntry {
            timestamp: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            recipient: recipient.to_string(),
            sender: "ops@example.com".to_string(),
            subject: "Weekly update".to_string(),
        }
    }

    #[test]
    fn test_record_appends_one_csv_line_per_entry() -> TestResult {
        let path = std::env::temp_dir().join(format!(
            "mailrun-delivery-log-{}.csv",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let log = FileDeliveryLog::new(&path);

        log.record(&entry("one@example.com"))?;
        log.record(&entry("two@example.com"))?;

        let contents = std::fs::read_to_string(&path)?;
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "2025-01-02T03:04:05+00:00,one@example.com,ops@example.com,Weekly update"
        );
        assert_eq!(
            lines[1],
            "2025-01-02T03:04:05+00:00,two@example.com,ops@example.com,Weekly update"
        );

        std::fs::remove_file(&path)?;

        Ok(())
    }
}
