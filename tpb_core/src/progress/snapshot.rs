use serde::Serialize;

/// Everything a host needs to paint one display, captured after an update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySnapshot {
    /// Label rendered to its fixed width.
    pub label: String,
    pub current: f64,
    pub done: f64,
    pub fill_ratio: f64,
    pub percent: i64,
    pub overlay: String,
    pub rate_text: String,
    pub remaining_text: String,
    pub elapsed_secs: f64,
    pub complete: bool,
}
