use tpb_core::progress::{DisplayObserver, DisplaySnapshot};

/// Writes every snapshot to stdout as one JSON line.
pub struct JsonObserver;

impl DisplayObserver for JsonObserver {
    fn on_update(&self, snapshot: &DisplaySnapshot) {
        match serde_json::to_string(snapshot) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("[JsonObserver] failed to serialize snapshot: {}", e),
        }
    }
}
