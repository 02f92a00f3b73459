use quillsafe_crypto::{
    HEADER_SIZE, TAG_SIZE, decrypt_bytes, decrypt_text, encrypt_bytes, encrypt_text,
};

#[test]
fn text_roundtrip() {
    let envelope = encrypt_text("a note about groceries", "hunter2").unwrap();
    let content = decrypt_text(&envelope, "hunter2").unwrap();
    assert_eq!(content, "a note about groceries");
}

#[test]
fn bytes_roundtrip() {
    let data = vec![0x00, 0x01, 0xFE, 0xFF, 0x7F];
    let envelope = encrypt_bytes(&data, "blob-password").unwrap();
    let recovered = decrypt_bytes(&envelope, "blob-password").unwrap();
    assert_eq!(recovered, data);
}

#[test]
fn empty_text_roundtrip() {
    let envelope = encrypt_text("", "pw").unwrap();
    assert_eq!(decrypt_text(&envelope, "pw").unwrap(), "");
}

#[test]
fn empty_bytes_roundtrip() {
    let envelope = encrypt_bytes(b"", "pw").unwrap();
    // Header plus GCM tag, nothing else
    assert_eq!(envelope.len(), HEADER_SIZE + TAG_SIZE);
    assert_eq!(decrypt_bytes(&envelope, "pw").unwrap(), b"");
}

#[test]
fn unicode_content_roundtrip() {
    let content = "메모 📝 — café, naïve, Ω";
    let envelope = encrypt_text(content, "пароль").unwrap();
    assert_eq!(decrypt_text(&envelope, "пароль").unwrap(), content);
}

#[test]
fn large_blob_roundtrip() {
    let data = vec![0xABu8; 1_000_000]; // 1 MB image-sized blob
    let envelope = encrypt_bytes(&data, "big-blob").unwrap();
    assert_eq!(decrypt_bytes(&envelope, "big-blob").unwrap(), data);
}

#[test]
fn envelope_length_is_header_plus_plaintext_plus_tag() {
    let data = b"twelve bytes";
    let envelope = encrypt_bytes(data, "pw").unwrap();
    assert_eq!(envelope.len(), HEADER_SIZE + data.len() + TAG_SIZE);
}

#[test]
fn same_input_never_produces_same_envelope() {
    let env1 = encrypt_bytes(b"identical plaintext", "identical password").unwrap();
    let env2 = encrypt_bytes(b"identical plaintext", "identical password").unwrap();

    // Fresh salt and nonce every call
    assert_ne!(&env1[..16], &env2[..16], "salts must differ");
    assert_ne!(&env1[16..28], &env2[16..28], "nonces must differ");
    assert_ne!(env1, env2);

    // Both still decrypt to the same plaintext
    assert_eq!(decrypt_bytes(&env1, "identical password").unwrap(), b"identical plaintext");
    assert_eq!(decrypt_bytes(&env2, "identical password").unwrap(), b"identical plaintext");
}

#[test]
fn text_envelope_is_printable_base64() {
    let envelope = encrypt_text("note body", "pw").unwrap();
    assert!(envelope.is_ascii());
    assert!(!envelope.contains('\n'), "no line wrapping");
    assert!(
        envelope
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=')
    );
}

#[test]
fn hello_world_scenario() {
    let envelope = encrypt_text("hello world", "correct horse").unwrap();
    assert_eq!(decrypt_text(&envelope, "correct horse").unwrap(), "hello world");
    assert!(decrypt_text(&envelope, "wrong password").is_err());
}

#[test]
fn image_magic_bytes_scenario() {
    let png_prefix = [0x89u8, 0x50, 0x4E];
    let envelope = encrypt_bytes(&png_prefix, "img-pass").unwrap();
    assert_eq!(decrypt_bytes(&envelope, "img-pass").unwrap(), png_prefix);
}

// Property-based tests
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bytes_always_roundtrip(
            data in proptest::collection::vec(any::<u8>(), 0..512),
            password in ".{0,32}",
        ) {
            let envelope = encrypt_bytes(&data, &password).unwrap();
            prop_assert_eq!(decrypt_bytes(&envelope, &password).unwrap(), data);
        }

        #[test]
        fn text_always_roundtrips(content in ".{0,256}", password in ".{0,32}") {
            let envelope = encrypt_text(&content, &password).unwrap();
            prop_assert_eq!(decrypt_text(&envelope, &password).unwrap(), content);
        }
    }
}
