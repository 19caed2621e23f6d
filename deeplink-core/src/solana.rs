//! Solana Pay links and bare Solana account ids. Payments are not supported
//! yet, so a match only yields a notice.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ClassifierConfig;
use crate::types::{QrCodeData, QrCodeKind};
use crate::validation::is_solana_address;

pub const SOLANA_COMING_SOON: &str = "Solana payment coming soon.";

static SOLANA_PAY_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^solana:(?P<recipient>[1-9A-HJ-NP-Za-km-z]{32,44})(?:\?[^\n\r\x{2028}\x{2029}]*)?$")
        .expect("solana pay regex is valid")
});

/// Recognize `solana:<address>[?...]` or a bare base58 account id.
pub fn parse_solana(input: &str, _config: &ClassifierConfig) -> Option<QrCodeData> {
    if SOLANA_PAY_URI.is_match(input) {
        return Some(QrCodeData::notice(QrCodeKind::Solana, None, SOLANA_COMING_SOON));
    }

    if is_solana_address(input) {
        return Some(QrCodeData::notice(
            QrCodeKind::Solana,
            Some(input.to_string()),
            SOLANA_COMING_SOON,
        ));
    }

    None
}
