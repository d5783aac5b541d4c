use log::info;
use rcgen::{generate_simple_self_signed, CertifiedKey};
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use sha1::{Digest, Sha1};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use crate::config::structs::configuration::Configuration;
use crate::monitor::structs::file_monitor::FileMonitor;
use crate::store::enums::load_error::LoadError;
use crate::store::structs::credential_set::CredentialSet;
use crate::store::structs::reloading_cert_resolver::ReloadingCertResolver;
use crate::store::structs::reloading_keystore::ReloadingKeystore;
use crate::store::structs::reloading_truststore::ReloadingTruststore;

/// Alias assigned to the single entry of a `pem` format keystore.
pub const DEFAULT_ALIAS: &str = "default";

/// Builds a rustls server configuration that resolves its certificate
/// through a reloadable keystore.
pub fn create_server_config(
    resolver: Arc<ReloadingCertResolver>,
) -> rustls::ServerConfig {
    rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_cert_resolver(resolver)
}

/// Builds a rustls root store from the truststore's current snapshot.
pub fn create_root_store(
    truststore: &ReloadingTruststore,
) -> Result<rustls::RootCertStore, LoadError> {
    let mut roots = rustls::RootCertStore::empty();
    for certificate in truststore.certificates() {
        roots
            .add(certificate)
            .map_err(|e| LoadError::Corrupt(format!("Rejected trusted certificate: {}", e)))?;
    }
    Ok(roots)
}

/// Hex SHA-1 digest of a store password, as carried in manifest files.
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha1::digest(password.as_bytes()))
}

/// Builds the providers and file monitors described by a configuration.
///
/// Each configured store is loaded once up front; any load failure aborts
/// the whole assembly, since a provider without an initial good snapshot
/// cannot exist.
pub fn create_from_config(config: &Configuration) -> Result<CredentialSet, LoadError> {
    let interval = Duration::from_secs(config.monitor_interval);
    let mut set = CredentialSet {
        keystore: None,
        truststore: None,
        resolver: None,
        monitors: Vec::new(),
    };
    if let Some(keystore_config) = &config.keystore {
        let keystore = Arc::new(ReloadingKeystore::new(
            keystore_config.format,
            &keystore_config.path,
            keystore_config.password.clone(),
            keystore_config.key_password.clone(),
        )?);
        let alias = keystore_config.default_alias.as_deref().unwrap_or(DEFAULT_ALIAS);
        set.resolver = Some(Arc::new(ReloadingCertResolver::new(keystore.clone(), alias)?));
        set.monitors.push(FileMonitor::new(&keystore_config.path, interval, keystore.clone()));
        set.keystore = Some(keystore);
    }
    if let Some(truststore_config) = &config.truststore {
        let truststore = Arc::new(ReloadingTruststore::new(
            truststore_config.format,
            &truststore_config.path,
            truststore_config.password.clone(),
        )?);
        set.monitors.push(FileMonitor::new(&truststore_config.path, interval, truststore.clone()));
        set.truststore = Some(truststore);
    }
    Ok(set)
}

/// Generates a self-signed key and certificate pair, written as PEM files.
/// Development aid only.
pub fn generate_self_signed(
    subject_alt_names: Vec<String>,
    key_path: &Path,
    cert_path: &Path,
) -> Result<(), std::io::Error> {
    let CertifiedKey { cert, signing_key } =
        generate_simple_self_signed(subject_alt_names).map_err(std::io::Error::other)?;
    fs::write(key_path, signing_key.serialize_pem())?;
    fs::write(cert_path, cert.pem())?;
    info!(
        "[CERTGEN] Generated self-signed key {} and certificate {}",
        key_path.display(),
        cert_path.display()
    );
    Ok(())
}

/// Reads a store file, mapping filesystem failures into the load taxonomy.
pub(crate) fn read_store_file(path: &Path) -> Result<Vec<u8>, LoadError> {
    match fs::read(path) {
        Ok(data) => Ok(data),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(LoadError::NotFound(format!("{}: {}", path.display(), err)))
        }
        Err(err) => Err(LoadError::Unreadable(format!("{}: {}", path.display(), err))),
    }
}

/// Checks a supplied password against a manifest digest. A manifest without
/// a digest accepts any password; a digest mismatch is a decode failure,
/// indistinguishable from other corruption.
pub(crate) fn verify_digest(
    expected: Option<&str>,
    supplied: Option<&str>,
    label: &str,
) -> Result<(), LoadError> {
    match expected {
        None => Ok(()),
        Some(digest) => match supplied {
            Some(password) if password_digest(password).eq_ignore_ascii_case(digest) => Ok(()),
            _ => Err(LoadError::Corrupt(format!("{} verification failed", label))),
        },
    }
}

/// Collects every certificate in a PEM byte stream.
pub(crate) fn parse_certificates(pem: &[u8]) -> Result<Vec<CertificateDer<'static>>, LoadError> {
    let mut reader = pem;
    rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| LoadError::Corrupt(e.to_string()))
}

/// Extracts the first private key in a PEM byte stream, trying PKCS#8,
/// PKCS#1, then SEC1 encodings.
pub(crate) fn parse_private_key(pem: &[u8]) -> Result<PrivateKeyDer<'static>, LoadError> {
    let mut reader = pem;
    if let Some(key_result) = rustls_pemfile::pkcs8_private_keys(&mut reader).next() {
        return key_result
            .map(PrivateKeyDer::Pkcs8)
            .map_err(|e| LoadError::Corrupt(e.to_string()));
    }
    let mut reader = pem;
    if let Some(key_result) = rustls_pemfile::rsa_private_keys(&mut reader).next() {
        return key_result
            .map(PrivateKeyDer::Pkcs1)
            .map_err(|e| LoadError::Corrupt(e.to_string()));
    }
    let mut reader = pem;
    if let Some(key_result) = rustls_pemfile::ec_private_keys(&mut reader).next() {
        return key_result
            .map(PrivateKeyDer::Sec1)
            .map_err(|e| LoadError::Corrupt(e.to_string()));
    }
    Err(LoadError::Corrupt(String::from("No private key found in file")))
}
