//! Classification of scanned QR-code payloads into payment intents.
//!
//! A payload is tried against a fixed list of recognizers (web link, EIP-681
//! transfer URI, bare EVM address, Solana, Stellar) and the first match wins.
//! Every input yields a [`QrCodeData`]; anything unrecognized is
//! [`QrCodeKind::Unknown`]. Classification is pure and performs no I/O.
//!
//! ```
//! use deeplink_core::{classify, QrCodeKind};
//!
//! let data = classify("0x1111111111111111111111111111111111111111");
//! assert_eq!(data.kind, QrCodeKind::Address);
//! assert_eq!(data.transfer.unwrap().chain_id, Some(8453));
//! ```

pub mod classifier;
pub mod config;
pub mod ethereum;
pub mod output;
pub mod payment;
pub mod session;
pub mod solana;
pub mod stellar;
pub mod types;
pub mod validation;
pub mod website;

pub use classifier::{classify, Classifier};
pub use config::{ClassifierConfig, ConfigError, BASE_CHAIN_ID, BASE_USDC_ADDRESS};
pub use output::{display_target, truncate_address, AgentError, OutputMode};
pub use payment::{PaymentRequest, PaymentRequestError, ScanAction};
pub use session::ScanSession;
pub use types::{Protocol, QrCodeData, QrCodeKind, TransferDescriptor};
pub use validation::{
    is_solana_address, is_stellar_account_id, normalize_evm_address, AddressValidationError,
};
