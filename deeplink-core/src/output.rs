//! Output helpers for human and agent modes.

use serde::Serialize;

use crate::types::QrCodeData;

/// Human (TTY) vs Agent (non-interactive) output selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Agent,
}

/// Agent-mode error payload.
#[derive(Debug, Clone, Serialize)]
pub struct AgentError {
    pub error: String,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// Truncate long addresses for human-readable tables.
pub fn truncate_address(addr: &str) -> String {
    let s = addr.trim();
    if s.chars().count() <= 14 {
        return s.to_string();
    }

    let start: String = s.chars().take(6).collect();
    let end: String = s
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    format!("{start}...{end}")
}

/// The most specific target a result points at, for table display.
pub fn display_target(data: &QrCodeData) -> String {
    if let Some(url) = &data.website {
        return url.clone();
    }
    if let Some(transfer) = &data.transfer {
        return truncate_address(&transfer.recipient);
    }
    data.address
        .as_deref()
        .map(truncate_address)
        .unwrap_or_else(|| "-".to_string())
}
