use crate::shared::i18n::Language;
use crate::shared::style::{FontSize, Theme};
use crate::system::auth::{Credential, CredentialTable};
use crate::system::settings::SystemSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app: AppInfo,
    pub session: SessionDefaults,
    pub system: SystemSettings,
    pub credentials: Vec<Credential>,
}

/// Identity and contact details shown in the header and footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInfo {
    pub title: String,
    pub version: String,
    pub company: String,
    pub project_manager: String,
    pub support_email: String,
    pub support_phone: String,
    pub support_url: String,
}

impl Default for AppInfo {
    fn default() -> Self {
        Self {
            title: "IMS - Information Management System".to_string(),
            version: "2.1.0".to_string(),
            company: "Corporate Systems Client".to_string(),
            project_manager: "System Development Engineer".to_string(),
            support_email: "support@company.com".to_string(),
            support_phone: "+1 (555) 123-4567".to_string(),
            support_url: "help.company.com/ims".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionDefaults {
    pub theme: Theme,
    pub language: Language,
    pub font_size: FontSize,
    /// Cosmetic delay of the simulated backup
    pub backup_delay_ms: u32,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: Language::En,
            font_size: FontSize::Medium,
            backup_delay_ms: 2000,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn credential_table(&self) -> CredentialTable {
        CredentialTable::new(self.credentials.clone())
    }
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[app]
title = "IMS - Information Management System"
version = "2.1.0"
company = "Corporate Systems Client"
project_manager = "System Development Engineer"
support_email = "support@company.com"
support_phone = "+1 (555) 123-4567"
support_url = "help.company.com/ims"

[session]
theme = "dark"
language = "en"
font_size = "medium"
backup_delay_ms = 2000

[system]
company_name = "Corporate Systems Client"
system_name = "Information Management System"
smtp_server = "mail.company.com"
smtp_port = 587
session_timeout_minutes = 30
max_login_attempts = 3
retention_days = 365

[[credentials]]
username = "demo"
password = "demo"
display_name = "John Smith"

[[credentials]]
username = "manager"
password = "manager"
display_name = "Jane Doe"
"#;

/// Load the embedded configuration
pub fn load_config() -> anyhow::Result<AppConfig> {
    log::info!("Using default embedded configuration");
    AppConfig::from_toml_str(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::LoginRequest;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.app.version, "2.1.0");
        assert_eq!(config.session.theme, Theme::Dark);
        assert_eq!(config.session.backup_delay_ms, 2000);
        assert_eq!(config.system, SystemSettings::default());
        assert_eq!(config.credentials.len(), 2);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = AppConfig::from_toml_str("[session]\nlanguage = \"fr\"\n").unwrap();
        assert_eq!(config.session.language, Language::Fr);
        assert_eq!(config.session.font_size, FontSize::Medium);
        assert_eq!(config.app, AppInfo::default());
        assert!(config.credentials.is_empty());
    }

    #[test]
    fn test_invalid_document_is_an_error() {
        assert!(AppConfig::from_toml_str("[session]\ntheme = \"forest\"\n").is_err());
        assert!(AppConfig::from_toml_str("not toml at all =").is_err());
    }

    #[test]
    fn test_credential_table_from_config() {
        let table = load_config().unwrap().credential_table();
        let info = table.check(&LoginRequest::new("manager", "manager")).unwrap();
        assert_eq!(info.display_name, "Jane Doe");
    }
}
