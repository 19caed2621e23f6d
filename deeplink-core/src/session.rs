//! One open scanner session. A camera may decode the same code many times, or
//! several codes at once; only the first payload delivered is acted on.

use tracing::debug;

use crate::classifier::Classifier;
use crate::types::QrCodeData;

#[derive(Debug, Clone, Default)]
pub struct ScanSession {
    classifier: Classifier,
    result: Option<QrCodeData>,
    ignored: usize,
}

impl ScanSession {
    /// Open a session using the default chain and token.
    pub fn open() -> Self {
        Self::with_classifier(Classifier::default())
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        Self {
            classifier,
            result: None,
            ignored: 0,
        }
    }

    /// Offer a decoded payload. Returns the classification for the first
    /// payload of the session and `None` for every later one.
    pub fn offer(&mut self, raw: &str) -> Option<QrCodeData> {
        if self.result.is_some() {
            self.ignored += 1;
            debug!(ignored = self.ignored, "scan session already consumed a payload");
            return None;
        }

        let data = self.classifier.classify(raw);
        self.result = Some(data.clone());
        Some(data)
    }

    /// The classification consumed by this session, if any.
    pub fn result(&self) -> Option<&QrCodeData> {
        self.result.as_ref()
    }

    /// Payloads delivered after the first one.
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    /// Reopen the scanner, e.g. after the user cancels a payment.
    pub fn reset(&mut self) {
        self.result = None;
        self.ignored = 0;
    }
}
