//! # Webhook Signature Tests

use kizmet_sanity::{encode_signature_header, verify_signature, SignatureError};

const SECRET: &str = "whsec-test";
const BODY: &[u8] = br#"{"_type":"service","slug":{"current":"hot-stone"}}"#;

#[test]
fn test_encoded_header_verifies() {
    let header = encode_signature_header(SECRET, 1_700_000_000_000, BODY).unwrap();
    assert!(header.starts_with("t=1700000000000,v1="));
    assert!(!header.ends_with('='), "signature is unpadded");
    assert_eq!(verify_signature(SECRET, Some(&header), BODY), Ok(()));
}

#[test]
fn test_tampered_body_fails() {
    let header = encode_signature_header(SECRET, 1_700_000_000_000, BODY).unwrap();
    let tampered = br#"{"_type":"siteSettings"}"#;
    assert_eq!(
        verify_signature(SECRET, Some(&header), tampered),
        Err(SignatureError::Mismatch)
    );
}

#[test]
fn test_wrong_secret_or_timestamp_fails() {
    let header = encode_signature_header(SECRET, 1_700_000_000_000, BODY).unwrap();
    assert_eq!(
        verify_signature("other-secret", Some(&header), BODY),
        Err(SignatureError::Mismatch)
    );

    let shifted = header.replace("t=1700000000000", "t=1700000000001");
    assert_eq!(
        verify_signature(SECRET, Some(&shifted), BODY),
        Err(SignatureError::Mismatch)
    );
}

#[test]
fn test_missing_and_malformed_headers() {
    assert_eq!(
        verify_signature(SECRET, None, BODY),
        Err(SignatureError::Missing)
    );
    assert!(matches!(
        verify_signature(SECRET, Some("v1=abc"), BODY),
        Err(SignatureError::Malformed(_))
    ));
    assert!(matches!(
        verify_signature(SECRET, Some("t=notanumber,v1=abc"), BODY),
        Err(SignatureError::Malformed(_))
    ));
    assert!(matches!(
        verify_signature(SECRET, Some("t=1"), BODY),
        Err(SignatureError::Malformed(_))
    ));
}
