use rustls::pki_types::{
    CertificateDer,
    PrivateKeyDer
};

/// A private key and the certificate chain it belongs to, keyed by alias in
/// a [`crate::store::structs::keystore_snapshot::KeystoreSnapshot`].
pub struct KeystoreEntry {
    pub key: PrivateKeyDer<'static>,
    pub chain: Vec<CertificateDer<'static>>,
}
