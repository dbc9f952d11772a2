use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CcrmError, Result};
use crate::utils::validation::{validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: StorageConfig,
    pub enrollment: Option<EnrollmentConfig>,
    pub bootstrap: Option<BootstrapConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_folder: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentConfig {
    pub max_credits: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    pub seed_sample_data: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CcrmError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CcrmError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` occurrences with environment values. Unset
    /// variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn data_folder(&self) -> &str {
        &self.storage.data_folder
    }

    fn max_credits(&self) -> u32 {
        self.enrollment
            .as_ref()
            .and_then(|e| e.max_credits)
            .unwrap_or(crate::core::DEFAULT_MAX_CREDITS)
    }

    fn seed_sample_data(&self) -> bool {
        self.bootstrap
            .as_ref()
            .and_then(|b| b.seed_sample_data)
            .unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage.data_folder", &self.storage.data_folder)?;
        validate_range("enrollment.max_credits", self.max_credits(), 1, 60)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            [storage]
            data_folder = "./data"
            "#,
        )
        .unwrap();
        assert_eq!(config.data_folder(), "./data");
        assert_eq!(config.max_credits(), 18);
        assert!(config.seed_sample_data());
    }

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
            [storage]
            data_folder = "/tmp/ccrm"

            [enrollment]
            max_credits = 21

            [bootstrap]
            seed_sample_data = false
            "#,
        )
        .unwrap();
        assert_eq!(config.max_credits(), 21);
        assert!(!config.seed_sample_data());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CCRM_TEST_DATA_DIR", "/tmp/ccrm-env");
        let config = TomlConfig::from_toml_str(
            r#"
            [storage]
            data_folder = "${CCRM_TEST_DATA_DIR}"
            "#,
        )
        .unwrap();
        assert_eq!(config.data_folder(), "/tmp/ccrm-env");
    }

    #[test]
    fn test_invalid_max_credits_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
            [storage]
            data_folder = "./data"

            [enrollment]
            max_credits = 0
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
