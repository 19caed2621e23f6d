use deeplink_core::{
    classify, Classifier, ClassifierConfig, QrCodeData, QrCodeKind, ScanAction, BASE_CHAIN_ID,
    BASE_USDC_ADDRESS,
};
use proptest::prelude::*;

const USDC_LOWER: &str = "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913";
const RECIPIENT: &str = "0x1111111111111111111111111111111111111111";

fn assert_consistent(data: &QrCodeData) {
    match data.kind {
        QrCodeKind::Website => {
            assert!(data.website.is_some());
            assert!(data.transfer.is_none() && data.address.is_none());
        }
        QrCodeKind::Eip681 | QrCodeKind::Address => {
            assert!(data.transfer.is_some());
            assert!(data.website.is_none() && data.address.is_none());
        }
        QrCodeKind::Solana | QrCodeKind::Stellar => {
            assert!(data.message.is_some());
            assert!(data.website.is_none() && data.transfer.is_none());
        }
        QrCodeKind::Unknown => assert_eq!(data, &QrCodeData::unknown()),
    }
}

#[test]
fn eip681_transfer_with_chain_and_amount() {
    let data = classify(&format!(
        "ethereum:{USDC_LOWER}@8453/transfer?address={RECIPIENT}&uint256=1000000"
    ));

    assert_eq!(data.kind, QrCodeKind::Eip681);
    let transfer = data.transfer.expect("transfer descriptor");
    assert_eq!(transfer.chain_id, Some(8453));
    assert_eq!(transfer.recipient, RECIPIENT);
    assert_eq!(transfer.contract_address, BASE_USDC_ADDRESS);
    assert_eq!(transfer.amount.as_deref(), Some("1000000"));
}

#[test]
fn eip681_without_chain_uses_default() {
    let data = classify(&format!("ethereum:{USDC_LOWER}/transfer?address={RECIPIENT}"));
    assert_eq!(data.transfer.unwrap().chain_id, Some(BASE_CHAIN_ID));
}

#[test]
fn eip681_without_recipient_is_unknown() {
    let data = classify(&format!("ethereum:{USDC_LOWER}/transfer?uint256=5"));
    assert_eq!(data, QrCodeData::unknown());
}

#[test]
fn bare_evm_address_defaults_token_and_chain() {
    let data = classify(RECIPIENT);

    assert_eq!(data.kind, QrCodeKind::Address);
    assert!(data.message.as_deref().is_some_and(|m| !m.is_empty()));
    let transfer = data.transfer.unwrap();
    assert_eq!(transfer.contract_address, BASE_USDC_ADDRESS);
    assert_eq!(transfer.chain_id, Some(BASE_CHAIN_ID));
    assert!(transfer.amount.is_none());
}

#[test]
fn website_is_passed_through_exactly() {
    assert_eq!(
        classify("https://example.com/pay"),
        QrCodeData::website("https://example.com/pay")
    );
}

#[test]
fn unrecognized_text_is_unknown() {
    let data = classify("not a recognizable payment string");
    assert_eq!(data, QrCodeData::unknown());
    assert_eq!(
        serde_json::to_value(&data).unwrap(),
        serde_json::json!({ "type": "unknown" })
    );
}

#[test]
fn overlapping_inputs_resolve_by_priority() {
    // A link carrying a transfer URI is still a link.
    let link = format!("https://pay.example/ethereum:{USDC_LOWER}/transfer?address={RECIPIENT}");
    assert_eq!(classify(&link).kind, QrCodeKind::Website);

    // A link whose path is a bare address is still a link.
    assert_eq!(classify(&format!("http://{RECIPIENT}")).kind, QrCodeKind::Website);

    // A transfer URI is never mistaken for a Solana Pay URI.
    assert_eq!(
        classify(&format!("ethereum:{USDC_LOWER}/transfer?address={RECIPIENT}")).kind,
        QrCodeKind::Eip681
    );

    // An uppercase base58 id fits both alphabets; only Solana's length rule accepts it.
    let both_alphabets = "GABCDEFGHJKLMNPQRSTUVWXYZ234567ABCDEFGHJKL";
    assert_eq!(classify(both_alphabets).kind, QrCodeKind::Solana);
}

#[test]
fn non_evm_results_carry_notices() {
    let solana = classify("solana:7EcDhSYGxXyscszYEp35KHN8vvw3svAuLKTzXwCFLtV?amount=1");
    assert_eq!(solana.kind, QrCodeKind::Solana);
    assert!(solana.address.is_none());

    let stellar = classify("web+stellar:pay?destination=GAAZI4TCR3TY5OJHCTJC2A4QSY6CJWJH5IAJTGKIN2ER7LBNVKOCCWN7");
    assert_eq!(stellar.kind, QrCodeKind::Stellar);
    assert!(matches!(ScanAction::from(&stellar), ScanAction::Notice { .. }));
}

#[test]
fn configured_classifier_changes_defaults_only() {
    let config = ClassifierConfig::from_toml_str("default_chain_id = 1").unwrap();
    let classifier = Classifier::new(config);

    let bare = classifier.classify(RECIPIENT).transfer.unwrap();
    assert_eq!(bare.chain_id, Some(1));
    assert_eq!(bare.contract_address, BASE_USDC_ADDRESS);

    let explicit = classifier
        .classify(&format!("ethereum:{USDC_LOWER}@10/transfer?address={RECIPIENT}"))
        .transfer
        .unwrap();
    assert_eq!(explicit.chain_id, Some(10));
}

#[test]
fn edge_inputs_do_not_panic() {
    let long = "a".repeat(20_000);
    let long_uri = format!("ethereum:{USDC_LOWER}/transfer?address={RECIPIENT}&memo={long}");
    let inputs = [
        String::new(),
        "\0".to_string(),
        format!("{RECIPIENT}\0"),
        long.clone(),
        format!("https://{long}"),
        long_uri,
        "\u{FEFF}https://example.com".to_string(),
        "ethereum:".to_string(),
        "solana:".to_string(),
        "web+stellar:pay?".to_string(),
    ];

    for input in &inputs {
        assert_consistent(&classify(input));
    }
    assert_eq!(classify(&format!("https://{long}")).kind, QrCodeKind::Website);
    assert_eq!(classify(&format!("{RECIPIENT}\0")).kind, QrCodeKind::Unknown);
}

proptest! {
    #[test]
    fn classify_is_total_and_consistent(input in any::<String>()) {
        assert_consistent(&classify(&input));
    }

    #[test]
    fn classify_is_deterministic(input in any::<String>()) {
        prop_assert_eq!(classify(&input), classify(&input));
    }

    #[test]
    fn any_hex_address_classifies_as_address(body in "[0-9a-f]{40}") {
        let data = classify(&format!("0x{body}"));
        prop_assert_eq!(data.kind, QrCodeKind::Address);
        let transfer = data.transfer.unwrap();
        prop_assert_eq!(transfer.recipient.to_ascii_lowercase(), format!("0x{body}"));
    }

    #[test]
    fn any_amount_is_carried_verbatim(amount in "[0-9]{1,80}") {
        let data = classify(&format!(
            "ethereum:{USDC_LOWER}/transfer?address={RECIPIENT}&uint256={amount}"
        ));
        prop_assert_eq!(data.transfer.unwrap().amount, Some(amount));
    }
}
