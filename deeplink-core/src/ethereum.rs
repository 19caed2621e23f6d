//! EVM payloads: EIP-681 transfer URIs and bare hex addresses.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::{ClassifierConfig, BASE_CHAIN_ID};
use crate::types::{Protocol, QrCodeData, QrCodeKind, TransferDescriptor};
use crate::validation::normalize_evm_address;

/// Shown when a bare address is paid on Base, the default network.
pub const BARE_ADDRESS_MESSAGE: &str =
    "Detected EVM address. Please make sure you are sending to Base.";

/// Line terminators a scanned URI may not contain, matching the JavaScript `.`.
const LINE_BREAK_FREE: &str = r"[^\n\r\x{2028}\x{2029}]";

static TRANSFER_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^ethereum:(?P<contract>0x[a-fA-F0-9]{{40}})(?:@(?P<chain_id>[0-9]+))?/(?P<function>[A-Za-z0-9_]+)\?(?P<query>{LINE_BREAK_FREE}+)$"
    ))
    .expect("transfer URI regex is valid")
});

static BARE_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("bare address regex is valid"));

struct TransferUri<'a> {
    contract: &'a str,
    chain_id: Option<&'a str>,
    function: &'a str,
    query: &'a str,
}

impl<'a> TransferUri<'a> {
    fn capture(input: &'a str) -> Option<Self> {
        let caps = TRANSFER_URI.captures(input)?;
        Some(Self {
            contract: caps.name("contract")?.as_str(),
            chain_id: caps.name("chain_id").map(|m| m.as_str()),
            function: caps.name("function")?.as_str(),
            query: caps.name("query")?.as_str(),
        })
    }
}

/// Recognize `ethereum:<contract>[@<chain id>]/<function>?<query>`.
///
/// `address` in the query names the recipient and is required; `uint256`
/// carries the raw amount. Any function name is accepted and lower-cased.
pub fn parse_transfer_uri(input: &str, config: &ClassifierConfig) -> Option<QrCodeData> {
    let uri = TransferUri::capture(input)?;

    let mut recipient = None;
    let mut amount = None;
    for (key, value) in url::form_urlencoded::parse(uri.query.as_bytes()) {
        match key.as_ref() {
            "address" if recipient.is_none() => recipient = Some(value.into_owned()),
            "uint256" if amount.is_none() => amount = Some(value.into_owned()),
            _ => {}
        }
    }
    let recipient = recipient.filter(|value| !value.is_empty())?;
    let amount = amount.filter(|value| !value.is_empty());

    let chain_id = match uri.chain_id {
        Some(digits) => match digits.parse::<u64>() {
            Ok(id) => id,
            Err(err) => {
                debug!(chain_id = digits, error = %err, "chain id out of range");
                return None;
            }
        },
        None => config.default_chain_id,
    };

    let contract_address = normalize(uri.contract)?;
    let recipient = normalize(&recipient)?;

    Some(QrCodeData::transfer(
        QrCodeKind::Eip681,
        TransferDescriptor {
            protocol: Protocol::Ethereum,
            contract_address,
            recipient,
            chain_id: Some(chain_id),
            function_name: Some(uri.function.to_ascii_lowercase()),
            amount,
        },
    ))
}

/// Recognize a bare `0x` + 40 hex address as a payment in the default token
/// on the default chain. The amount is left for the user to enter.
pub fn parse_address(input: &str, config: &ClassifierConfig) -> Option<QrCodeData> {
    if !BARE_ADDRESS.is_match(input) {
        return None;
    }
    let recipient = normalize(input)?;
    let contract_address = normalize(&config.default_token)?;

    Some(
        QrCodeData::transfer(
            QrCodeKind::Address,
            TransferDescriptor {
                protocol: Protocol::Ethereum,
                contract_address,
                recipient,
                chain_id: Some(config.default_chain_id),
                function_name: None,
                amount: None,
            },
        )
        .with_message(bare_address_message(config.default_chain_id)),
    )
}

/// Warning for a bare address, naming the network the funds will be sent on.
pub fn bare_address_message(chain_id: u64) -> String {
    if chain_id == BASE_CHAIN_ID {
        BARE_ADDRESS_MESSAGE.to_string()
    } else {
        format!("Detected EVM address. Please make sure you are sending to chain {chain_id}.")
    }
}

fn normalize(address: &str) -> Option<String> {
    match normalize_evm_address(address) {
        Ok(normalized) => Some(normalized),
        Err(err) => {
            debug!(address, error = %err, "EVM address failed normalization");
            None
        }
    }
}
