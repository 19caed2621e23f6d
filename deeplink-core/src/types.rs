//! Data types shared between CLI and core.

use serde::{Deserialize, Serialize};

/// Chain family a transfer descriptor targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Ethereum,
    Solana,
    Stellar,
}

impl Protocol {
    /// Stable string identifier used in JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Ethereum => "ethereum",
            Protocol::Solana => "solana",
            Protocol::Stellar => "stellar",
        }
    }
}

/// Shape of a scanned payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrCodeKind {
    Website,
    Eip681,
    Address,
    Solana,
    Stellar,
    Unknown,
}

impl QrCodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QrCodeKind::Website => "website",
            QrCodeKind::Eip681 => "eip681",
            QrCodeKind::Address => "address",
            QrCodeKind::Solana => "solana",
            QrCodeKind::Stellar => "stellar",
            QrCodeKind::Unknown => "unknown",
        }
    }
}

/// A value-transfer intent extracted from a scanned payload.
///
/// EVM addresses are always in EIP-55 checksum form. `amount` is the raw
/// integer in the token's smallest unit, carried as a string so large values
/// survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDescriptor {
    pub protocol: Protocol,
    pub contract_address: String,
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
}

/// Result of classifying one scanned payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCodeData {
    #[serde(rename = "type")]
    pub kind: QrCodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer: Option<TransferDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QrCodeData {
    /// The fallback result: no recognizer matched.
    pub fn unknown() -> Self {
        Self::bare(QrCodeKind::Unknown)
    }

    pub fn website(url: impl Into<String>) -> Self {
        Self {
            website: Some(url.into()),
            ..Self::bare(QrCodeKind::Website)
        }
    }

    pub fn transfer(kind: QrCodeKind, transfer: TransferDescriptor) -> Self {
        Self {
            transfer: Some(transfer),
            ..Self::bare(kind)
        }
    }

    /// Informational result for protocols without payment support.
    pub fn notice(kind: QrCodeKind, address: Option<String>, message: impl Into<String>) -> Self {
        Self {
            address,
            message: Some(message.into()),
            ..Self::bare(kind)
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == QrCodeKind::Unknown
    }

    fn bare(kind: QrCodeKind) -> Self {
        Self {
            kind,
            website: None,
            transfer: None,
            address: None,
            message: None,
        }
    }
}
