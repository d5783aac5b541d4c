use serde::{Deserialize, Serialize};

#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreFormat {
    #[default]
    toml,
    pem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_format_default() {
        let format = StoreFormat::default();
        assert_eq!(format, StoreFormat::toml);
    }

    #[test]
    fn test_store_format_serialization() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper { format: StoreFormat }
        let serialized = toml::to_string(&Wrapper { format: StoreFormat::pem }).unwrap();
        assert_eq!(serialized.trim(), "format = \"pem\"");
        let serialized = toml::to_string(&Wrapper { format: StoreFormat::toml }).unwrap();
        assert_eq!(serialized.trim(), "format = \"toml\"");
    }

    #[test]
    fn test_store_format_deserialization() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper { format: StoreFormat }
        let wrapper: Wrapper = toml::from_str("format = \"toml\"").unwrap();
        assert_eq!(wrapper.format, StoreFormat::toml);
        let wrapper: Wrapper = toml::from_str("format = \"pem\"").unwrap();
        assert_eq!(wrapper.format, StoreFormat::pem);
    }

    #[test]
    fn test_store_format_equality() {
        assert_eq!(StoreFormat::toml, StoreFormat::toml);
        assert_ne!(StoreFormat::toml, StoreFormat::pem);
    }

    #[test]
    fn test_store_format_debug() {
        let format = StoreFormat::pem;
        assert_eq!(format!("{:?}", format), "pem");
    }
}
