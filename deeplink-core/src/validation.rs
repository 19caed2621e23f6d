//! Address normalization for scanned payment targets.

use sha3::{Digest, Keccak256};
use thiserror::Error;

/// Hex digits in an EVM address body, without the `0x` prefix.
pub const EVM_ADDRESS_HEX_LEN: usize = 40;

/// Solana base58 account ids are 32 to 44 characters long.
pub const SOLANA_ADDRESS_MIN_LEN: usize = 32;
pub const SOLANA_ADDRESS_MAX_LEN: usize = 44;

/// Stellar account ids are `G` followed by 55 base32 characters.
pub const STELLAR_ACCOUNT_ID_LEN: usize = 56;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Normalization errors for EVM addresses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressValidationError {
    #[error("address is missing the 0x prefix")]
    MissingPrefix,
    #[error("address must have 40 hex digits after 0x (got {actual})")]
    InvalidLength { actual: usize },
    #[error("address contains non-hex characters")]
    InvalidCharacters,
    #[error("mixed-case address does not match its EIP-55 checksum")]
    InvalidChecksum,
}

/// Return the EIP-55 checksummed form of an EVM address.
///
/// All-lowercase and all-uppercase bodies are checksummed as-is. A mixed-case
/// body is taken to already carry a checksum and is rejected unless it matches.
///
/// This is looser than viem's strict `getAddress`, which the browser checkout
/// used and which also rejects all-uppercase bodies that are not themselves a
/// valid checksum.
pub fn normalize_evm_address(address: &str) -> Result<String, AddressValidationError> {
    let body = address
        .strip_prefix("0x")
        .ok_or(AddressValidationError::MissingPrefix)?;

    if !body.is_ascii() || body.len() != EVM_ADDRESS_HEX_LEN {
        return Err(AddressValidationError::InvalidLength {
            actual: body.chars().count(),
        });
    }
    if !body.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(AddressValidationError::InvalidCharacters);
    }

    let checksummed = to_checksum(body);

    let has_lower = body.bytes().any(|byte| byte.is_ascii_lowercase());
    let has_upper = body.bytes().any(|byte| byte.is_ascii_uppercase());
    if has_lower && has_upper && checksummed[2..] != *body {
        return Err(AddressValidationError::InvalidChecksum);
    }

    Ok(checksummed)
}

fn to_checksum(body: &str) -> String {
    let lower = body.to_ascii_lowercase();
    let hash = hex::encode(Keccak256::digest(lower.as_bytes()));

    let mut out = String::with_capacity(2 + EVM_ADDRESS_HEX_LEN);
    out.push_str("0x");
    for (c, nibble) in lower.chars().zip(hash.chars()) {
        if c.is_ascii_alphabetic() && nibble >= '8' {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Syntactic check for a bare Solana account id (base58, no `0`, `O`, `I`, `l`).
pub fn is_solana_address(candidate: &str) -> bool {
    let len = candidate.len();
    (SOLANA_ADDRESS_MIN_LEN..=SOLANA_ADDRESS_MAX_LEN).contains(&len)
        && candidate.chars().all(|c| BASE58_ALPHABET.contains(c))
}

/// Syntactic check for a Stellar account id (`G` + 55 chars of `A-Z`, `2-7`).
pub fn is_stellar_account_id(candidate: &str) -> bool {
    candidate.len() == STELLAR_ACCOUNT_ID_LEN
        && candidate.starts_with('G')
        && candidate
            .bytes()
            .all(|byte| byte.is_ascii_uppercase() || (b'2'..=b'7').contains(&byte))
}
