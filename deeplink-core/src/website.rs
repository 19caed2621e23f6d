//! Plain web links.

use crate::config::ClassifierConfig;
use crate::types::QrCodeData;

/// Recognize an `http://` or `https://` link. The input is returned untouched.
pub fn parse_website(input: &str, _config: &ClassifierConfig) -> Option<QrCodeData> {
    if input.starts_with("http://") || input.starts_with("https://") {
        Some(QrCodeData::website(input))
    } else {
        None
    }
}
