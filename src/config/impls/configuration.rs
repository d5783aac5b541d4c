use std::fs;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::keystore_config::KeystoreConfig;
use crate::config::structs::truststore_config::TruststoreConfig;
use crate::store::enums::store_format::StoreFormat;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            monitor_interval: 60,
            keystore: Some(KeystoreConfig {
                path: String::from("keystore.toml"),
                format: StoreFormat::toml,
                password: None,
                key_password: None,
                default_alias: Some(String::from("default")),
            }),
            truststore: Some(TruststoreConfig {
                path: String::from("truststore.pem"),
                format: StoreFormat::pem,
                password: None,
            }),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_from_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = fs::read(path).map_err(ConfigurationError::IOError)?;
        Configuration::load(&data).map_err(ConfigurationError::ParseError)
    }

    pub fn save_to_file(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).unwrap();
        fs::write(path, config_toml).map_err(ConfigurationError::IOError)
    }
}
