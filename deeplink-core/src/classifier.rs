//! Dispatch a scanned payload to the first recognizer that accepts it.

use tracing::{debug, trace};

use crate::config::ClassifierConfig;
use crate::ethereum::{parse_address, parse_transfer_uri};
use crate::solana::parse_solana;
use crate::stellar::parse_stellar;
use crate::types::QrCodeData;
use crate::website::parse_website;

type Recognizer = fn(&str, &ClassifierConfig) -> Option<QrCodeData>;

/// Recognizers in priority order. The first match wins.
const RECOGNIZERS: [(&str, Recognizer); 5] = [
    ("website", parse_website),
    ("eip681", parse_transfer_uri),
    ("address", parse_address),
    ("solana", parse_solana),
    ("stellar", parse_stellar),
];

/// Classifies scanned payloads against a fixed set of defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Names of the recognizers, in the order they are tried.
    pub fn recognizer_names() -> [&'static str; 5] {
        RECOGNIZERS.map(|(name, _)| name)
    }

    /// Classify one payload. Every input yields a result; payloads nothing
    /// recognizes come back as [`QrCodeKind::Unknown`](crate::QrCodeKind::Unknown).
    pub fn classify(&self, input: &str) -> QrCodeData {
        for (name, recognize) in RECOGNIZERS {
            trace!(recognizer = name, "trying recognizer");
            if let Some(data) = recognize(input, &self.config) {
                debug!(recognizer = name, kind = data.kind.as_str(), "payload recognized");
                return data;
            }
        }

        debug!(len = input.len(), "payload not recognized");
        QrCodeData::unknown()
    }
}

/// Classify with the default chain and token.
pub fn classify(input: &str) -> QrCodeData {
    Classifier::default().classify(input)
}
