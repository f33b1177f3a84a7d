//! Chat logging to disk.
//!
//! When enabled, writes replayed and typed events to daily log files
//! organized by channel or query. Log files are named `<target>_<date>.log`
//! and stored in the configured log directory (default:
//! `~/.local/share/papatya/logs/`).

use crate::app::state::BufferKey;
use crate::config::LoggingConfig;
use crate::script::record::{EventKind, EventRecord};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Writes events to per-channel/query daily log files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to `/dev/null` if a log file cannot be created.
pub struct ChatLogger {
    enabled: bool,
    log_dir: String,
    log_channels: bool,
    log_queries: bool,
    file_handles: HashMap<String, fs::File>,
}

impl ChatLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            log_channels: config.log_channels,
            log_queries: config.log_queries,
            file_handles: HashMap::new(),
        }
    }

    /// Write an event to the appropriate log file. No-op if logging is
    /// disabled or the buffer type is not configured for logging.
    pub fn log_record(&mut self, key: &BufferKey, record: &EventRecord) {
        if !self.enabled {
            return;
        }

        let target = match key {
            BufferKey::Channel(ch) if self.log_channels => ch.clone(),
            BufferKey::Query(nick) if self.log_queries => nick.clone(),
            _ => return,
        };

        let line = format_record(record);

        // Sanitize target for filename
        let safe_target: String = target
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        let filename = format!("{}_{}.log", safe_target, date);

        // Expand ~ in log_dir
        let log_dir = if self.log_dir.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                home.join(&self.log_dir[2..])
            } else {
                PathBuf::from(&self.log_dir)
            }
        } else {
            PathBuf::from(&self.log_dir)
        };

        let filepath = log_dir.join(&filename);

        // Get or create file handle
        let handle = self.file_handles.entry(filename.clone()).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a sink that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let _ = writeln!(handle, "{}", line);
    }
}

fn format_record(record: &EventRecord) -> String {
    match record.kind {
        EventKind::Chat => format!("[{}] <{}> {}", record.time, record.user, record.message),
        EventKind::Login => format!(
            "[{}] *** Giriş: {} ({}) {}",
            record.time,
            record.user,
            record.hostmask.as_deref().unwrap_or(""),
            record.channel.as_deref().unwrap_or("")
        ),
        EventKind::Quit => format!(
            "[{}] *** Çıkış: {} ({})",
            record.time,
            record.user,
            record.hostmask.as_deref().unwrap_or("")
        ),
        EventKind::NickChange => format!(
            "[{}] * {} nickini {} olarak değiştirdi.",
            record.time,
            record.user,
            record.new_nick.as_deref().unwrap_or("")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_records_use_angle_brackets() {
        let record = EventRecord::chat("Gezgin", "selam");
        let line = format_record(&record);
        assert!(line.starts_with('['));
        assert!(line.ends_with("] <Gezgin> selam"));
    }

    #[test]
    fn churn_records_use_turkish_markers() {
        let login = EventRecord::login(
            "Gezgin",
            "PAPATYAv7@1.2.AAAA0000.sibertr.online",
            "#str_chat",
        );
        assert!(format_record(&login).contains("*** Giriş: Gezgin"));

        let quit = EventRecord::quit("Gezgin", "PAPATYAv7@1.2.AAAA0000.sibertr.online");
        assert!(format_record(&quit).contains("*** Çıkış: Gezgin"));
    }

    #[test]
    fn disabled_logger_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            enabled: false,
            log_dir: dir.path().display().to_string(),
            log_channels: true,
            log_queries: true,
        };
        let mut logger = ChatLogger::new(&config);
        logger.log_record(
            &BufferKey::Channel("#str_chat".into()),
            &EventRecord::chat("Gezgin", "selam"),
        );
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn channel_records_land_in_daily_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            enabled: true,
            log_dir: dir.path().display().to_string(),
            log_channels: true,
            log_queries: false,
        };
        let mut logger = ChatLogger::new(&config);
        logger.log_record(
            &BufferKey::Channel("#str_chat".into()),
            &EventRecord::chat("Gezgin", "selam"),
        );
        // Queries are not configured, so nothing for them
        logger.log_record(
            &BufferKey::Query("AzrA".into()),
            &EventRecord::chat("AzrA", "merhaba"),
        );

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        let path = entries[0].as_ref().unwrap().path();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("_str_chat_"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("<Gezgin> selam"));
    }
}
