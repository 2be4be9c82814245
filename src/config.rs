//! Configuration file handling

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use promptpay::Amount;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub merchant: MerchantConfig,
}

impl Config {
    /// Get the config file path for this platform
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "promptpay-qr").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load config from file, or create default if it doesn't exist
    pub fn load_or_create() -> Result<Self, Box<dyn Error>> {
        let path = Self::path().ok_or("could not determine config directory")?;
        Self::load_or_create_at(&path)
    }

    pub fn load_or_create_at(path: &Path) -> Result<Self, Box<dyn Error>> {
        if path.exists() {
            debug!("loading config from {}", path.display());
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            let config = Config::default();
            config.save_with_header(path)?;
            info!("created default config at {}", path.display());
            Ok(config)
        }
    }

    /// Save config with header comments for new files
    pub fn save_with_header(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let header = r#"# promptpay-qr configuration file
#
# [merchant]
# identifier = "081-234-5678"   # mobile number or 13 digit national id
# default_amount = "150.00"     # used when generate is run without --amount

"#;
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, format!("{header}{contents}"))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantConfig {
    /// PromptPay mobile number or national id used when none is given
    pub identifier: Option<String>,
    /// Amount used when none is given, omitted from payloads when unset
    pub default_amount: Option<Amount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_merchant_section() {
        let config: Config = toml::from_str(
            r#"
            [merchant]
            identifier = "081-234-5678"
            default_amount = "99.5"
            "#,
        )
        .unwrap();
        assert_eq!(config.merchant.identifier.as_deref(), Some("081-234-5678"));
        assert_eq!(
            config.merchant.default_amount,
            Some(Amount::from_satang(9950))
        );
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(toml::from_str::<Config>("[merchant]\ndefault_amount = \"-1\"").is_err());
    }

    #[test]
    fn creates_and_reloads_file() {
        let dir = std::env::temp_dir().join(format!("promptpay-qr-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let created = Config::load_or_create_at(&path).unwrap();
        assert_eq!(created, Config::default());
        assert!(fs::read_to_string(&path)
            .unwrap()
            .starts_with("# promptpay-qr configuration file"));

        let config = Config {
            merchant: MerchantConfig {
                identifier: Some("1234567890123".into()),
                default_amount: Some(Amount::from_satang(100)),
            },
        };
        config.save_with_header(&path).unwrap();
        assert_eq!(Config::load_or_create_at(&path).unwrap(), config);

        fs::remove_dir_all(&dir).unwrap();
    }
}
