//! Append-only JSONL writer for analysis events.
//!
//! Each [`ConversationEvent`] becomes one JSON object carrying the event
//! payload plus `type` and `timestamp` fields. Successive runs append to
//! the same file.

use pillpal_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Merge `type` and `timestamp` into the payload. Non-object payloads are
/// nested under `data`.
fn to_record(event: ConversationEvent, timestamp: String) -> Value {
    let mut record = match event.payload {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    record.insert("type".to_string(), Value::from(event.event_type));
    record.insert("timestamp".to_string(), Value::String(timestamp));
    Value::Object(record)
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = to_record(event, timestamp);

        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        if let Err(e) = writeln!(writer, "{}", record).and_then(|_| writer.flush()) {
            warn!("Failed to write analysis log {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
