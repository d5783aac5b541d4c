#![allow(dead_code)]

use rcgen::generate_simple_self_signed;
use rustls::pki_types::PrivateKeyDer;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use credstore::store::store::password_digest;
use credstore::store::structs::keystore_manifest::{KeystoreManifest, KeystoreManifestEntry};
use credstore::store::structs::truststore_manifest::TruststoreManifest;

/// Fresh self-signed key and certificate, PEM-encoded.
pub fn identity() -> (String, String) {
    let rcgen::CertifiedKey { cert, signing_key } =
        generate_simple_self_signed(vec![String::from("localhost")]).unwrap();
    (signing_key.serialize_pem(), cert.pem())
}

/// DER bytes of a PEM-encoded PKCS#8 private key, for comparing served
/// material against source files.
pub fn key_der(key_pem: &str) -> Vec<u8> {
    let mut reader = key_pem.as_bytes();
    let key = rustls_pemfile::pkcs8_private_keys(&mut reader)
        .next()
        .expect("PEM should contain a private key")
        .expect("private key should parse");
    PrivateKeyDer::Pkcs8(key).secret_der().to_vec()
}

/// Writes through a temp file and rename so the monitor never observes a
/// half-written store.
pub fn write_atomic(path: &Path, contents: &str) {
    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, contents).unwrap();
    std::fs::rename(&tmp, path).unwrap();
}

pub fn write_keystore_manifest(
    path: &Path,
    alias: &str,
    key_pem: &str,
    cert_pem: &str,
    store_password: Option<&str>,
) {
    let mut entries = HashMap::new();
    entries.insert(
        alias.to_string(),
        KeystoreManifestEntry {
            key: key_pem.to_string(),
            chain: cert_pem.to_string(),
            key_password: None,
        },
    );
    let manifest = KeystoreManifest {
        password: store_password.map(password_digest),
        entries,
    };
    write_atomic(path, &toml::to_string(&manifest).unwrap());
}

pub fn write_truststore_manifest(path: &Path, alias: &str, cert_pem: &str, password: Option<&str>) {
    let mut certificates = HashMap::new();
    certificates.insert(alias.to_string(), cert_pem.to_string());
    let manifest = TruststoreManifest {
        password: password.map(password_digest),
        certificates,
    };
    write_atomic(path, &toml::to_string(&manifest).unwrap());
}

/// Polls a condition until it holds or the timeout passes; never assumes a
/// fixed number of monitor ticks.
pub async fn wait_until<F: Fn() -> bool>(timeout: Duration, condition: F) -> bool {
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(25)).await;
    }
    condition()
}
