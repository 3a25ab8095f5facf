use crate::error::Result;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only log of stage transitions, one `{timestamp}:{message}` line
/// per stage. The file is part of the pipeline's observable output, not a
/// diagnostic channel; write failures propagate.
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Appends one timestamped line, creating the file if absent.
    pub fn append(&self, message: &str) -> Result<()> {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{timestamp}:{message}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn appends_timestamped_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("code_log.txt");
        let log = RunLog::new(&path);

        log.append("first stage").unwrap();
        log.append("second stage").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(":first stage"));
        assert!(lines[1].ends_with(":second stage"));
        // timestamp prefix has the `YYYY-MM-DD HH:MM:SS` shape
        let timestamp = &lines[0][..19];
        assert!(chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").is_ok());
        assert_eq!(&lines[0][19..20], ":");
    }

    #[test]
    fn unwritable_path_propagates_error() {
        let dir = tempfile::tempdir().unwrap();
        let log = RunLog::new(dir.path().join("missing").join("code_log.txt"));
        assert!(log.append("will not land").is_err());
    }
}
