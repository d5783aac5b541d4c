use rustls::pki_types::CertificateDer;

/// One fully-loaded, immutable view of a truststore file.
pub struct TruststoreSnapshot {
    pub certificates: Vec<CertificateDer<'static>>,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}
