//! SEP-7 `web+stellar:pay` links and bare Stellar account ids. Payments are
//! not supported yet, so a match only yields a notice.

use crate::config::ClassifierConfig;
use crate::types::{QrCodeData, QrCodeKind};
use crate::validation::is_stellar_account_id;

pub const STELLAR_COMING_SOON: &str = "Stellar payment coming soon.";

const PAY_URI_PREFIX: &str = "web+stellar:pay?";

/// Line terminators excluded by the JavaScript `.` the link format was defined with.
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Recognize `web+stellar:pay?<params>` or a bare `G...` account id.
pub fn parse_stellar(input: &str, _config: &ClassifierConfig) -> Option<QrCodeData> {
    if let Some(params) = input.strip_prefix(PAY_URI_PREFIX) {
        // Parameters must be present and on a single line.
        if !params.is_empty() && !params.contains(LINE_TERMINATORS) {
            return Some(QrCodeData::notice(QrCodeKind::Stellar, None, STELLAR_COMING_SOON));
        }
    }

    if is_stellar_account_id(input) {
        return Some(QrCodeData::notice(
            QrCodeKind::Stellar,
            Some(input.to_string()),
            STELLAR_COMING_SOON,
        ));
    }

    None
}
