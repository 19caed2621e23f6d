//! What the scanning UI should do with a classified payload.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::types::{QrCodeData, QrCodeKind, TransferDescriptor};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentRequestError {
    #[error("transfer has no chain id")]
    MissingChainId,
}

/// Parameters handed to the payment widget.
///
/// `to_units` is the raw smallest-unit amount; when absent the widget asks
/// the user for one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub to_address: String,
    pub to_chain: u64,
    pub to_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_units: Option<String>,
}

impl TryFrom<&TransferDescriptor> for PaymentRequest {
    type Error = PaymentRequestError;

    fn try_from(transfer: &TransferDescriptor) -> Result<Self, Self::Error> {
        let to_chain = transfer
            .chain_id
            .ok_or(PaymentRequestError::MissingChainId)?;

        Ok(Self {
            to_address: transfer.recipient.clone(),
            to_chain,
            to_token: transfer.contract_address.clone(),
            to_units: transfer.amount.clone().filter(|units| !units.is_empty()),
        })
    }
}

/// Next step for the UI after a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScanAction {
    /// Navigate externally; no payment is started.
    OpenWebsite { url: String },
    /// Open the payment widget.
    Pay(PaymentRequest),
    /// Show an informational notice, e.g. for unsupported chains.
    Notice {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        address: Option<String>,
    },
    Unrecognized,
}

impl From<&QrCodeData> for ScanAction {
    fn from(data: &QrCodeData) -> Self {
        match data.kind {
            QrCodeKind::Website => match &data.website {
                Some(url) => ScanAction::OpenWebsite { url: url.clone() },
                None => ScanAction::Unrecognized,
            },
            QrCodeKind::Eip681 | QrCodeKind::Address => {
                let Some(transfer) = &data.transfer else {
                    return ScanAction::Unrecognized;
                };
                match PaymentRequest::try_from(transfer) {
                    Ok(request) => ScanAction::Pay(request),
                    Err(err) => {
                        debug!(error = %err, "transfer cannot start a payment");
                        ScanAction::Unrecognized
                    }
                }
            }
            QrCodeKind::Solana | QrCodeKind::Stellar => ScanAction::Notice {
                message: data.message.clone().unwrap_or_default(),
                address: data.address.clone(),
            },
            QrCodeKind::Unknown => ScanAction::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::config::{BASE_CHAIN_ID, BASE_USDC_ADDRESS};
    use crate::types::Protocol;

    #[test]
    fn website_opens_externally() {
        assert_eq!(
            ScanAction::from(&classify("https://example.com/pay")),
            ScanAction::OpenWebsite {
                url: "https://example.com/pay".to_string()
            }
        );
    }

    #[test]
    fn eip681_becomes_payment_with_units() {
        let data = classify(
            "ethereum:0x833589fcd6edb6e08f4c7c32d4f71b54bda02913@8453/transfer?address=0x1111111111111111111111111111111111111111&uint256=1000000",
        );
        assert_eq!(
            ScanAction::from(&data),
            ScanAction::Pay(PaymentRequest {
                to_address: "0x1111111111111111111111111111111111111111".to_string(),
                to_chain: 8453,
                to_token: BASE_USDC_ADDRESS.to_string(),
                to_units: Some("1000000".to_string()),
            })
        );
    }

    #[test]
    fn bare_address_becomes_payment_without_units() {
        let ScanAction::Pay(request) =
            ScanAction::from(&classify("0x1111111111111111111111111111111111111111"))
        else {
            panic!("expected a payment action");
        };
        assert_eq!(request.to_chain, BASE_CHAIN_ID);
        assert_eq!(request.to_token, BASE_USDC_ADDRESS);
        assert!(request.to_units.is_none());
    }

    #[test]
    fn unsupported_chains_become_notices() {
        let action = ScanAction::from(&classify("7EcDhSYGxXyscszYEp35KHN8vvw3svAuLKTzXwCFLtV"));
        assert!(matches!(
            action,
            ScanAction::Notice { ref address, .. } if address.as_deref() == Some("7EcDhSYGxXyscszYEp35KHN8vvw3svAuLKTzXwCFLtV")
        ));
    }

    #[test]
    fn unknown_is_unrecognized() {
        assert_eq!(ScanAction::from(&classify("hello")), ScanAction::Unrecognized);
    }

    #[test]
    fn payment_request_requires_chain_id() {
        let transfer = TransferDescriptor {
            protocol: Protocol::Ethereum,
            contract_address: BASE_USDC_ADDRESS.to_string(),
            recipient: "0x1111111111111111111111111111111111111111".to_string(),
            chain_id: None,
            function_name: None,
            amount: None,
        };
        assert_eq!(
            PaymentRequest::try_from(&transfer),
            Err(PaymentRequestError::MissingChainId)
        );
    }

    #[test]
    fn action_json_is_tagged() {
        let value = serde_json::to_value(ScanAction::from(&classify(
            "0x1111111111111111111111111111111111111111",
        )))
        .unwrap();
        assert_eq!(value["action"], "pay");
        assert_eq!(value["toChain"], 8453);
        assert!(value.get("toUnits").is_none());

        let value = serde_json::to_value(ScanAction::Unrecognized).unwrap();
        assert_eq!(value, serde_json::json!({ "action": "unrecognized" }));
    }
}
