use crate::shared::i18n::TextKey;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const TIME_ZONES: [&str; 4] = ["UTC-5 (EST)", "UTC-8 (PST)", "UTC+0 (GMT)", "UTC+1 (CET)"];
pub const DEFAULT_LANGUAGES: [&str; 4] = ["English", "Spanish", "French", "German"];
pub const PASSWORD_POLICIES: [&str; 3] = ["Standard", "Strong", "Custom"];
pub const BACKUP_FREQUENCIES: [&str; 3] = ["Daily", "Weekly", "Monthly"];

pub const SMTP_PORT_RANGE: RangeInclusive<u32> = 1..=65535;
pub const SESSION_TIMEOUT_RANGE: RangeInclusive<u32> = 5..=480;
pub const LOGIN_ATTEMPTS_RANGE: RangeInclusive<u32> = 1..=10;
pub const RETENTION_DAYS_RANGE: RangeInclusive<u32> = 30..=2555;

/// Editable system configuration shown on the admin settings tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemSettings {
    pub company_name: String,
    pub system_name: String,
    pub time_zone: String,
    pub default_language: String,
    pub smtp_server: String,
    pub smtp_port: u32,
    pub email_from: String,
    pub session_timeout_minutes: u32,
    pub password_policy: String,
    pub two_factor: bool,
    pub max_login_attempts: u32,
    pub backup_frequency: String,
    pub retention_days: u32,
    pub auto_archive: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            company_name: "Corporate Systems Client".to_string(),
            system_name: "Information Management System".to_string(),
            time_zone: TIME_ZONES[0].to_string(),
            default_language: DEFAULT_LANGUAGES[0].to_string(),
            smtp_server: "mail.company.com".to_string(),
            smtp_port: 587,
            email_from: "noreply@company.com".to_string(),
            session_timeout_minutes: 30,
            password_policy: PASSWORD_POLICIES[0].to_string(),
            two_factor: true,
            max_login_attempts: 3,
            backup_frequency: BACKUP_FREQUENCIES[0].to_string(),
            retention_days: 365,
            auto_archive: true,
        }
    }
}

impl SystemSettings {
    /// First violated constraint, checked in form order
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.company_name.trim().is_empty() || self.system_name.trim().is_empty() {
            return Err(SettingsError::NameRequired);
        }
        check_range(self.smtp_port, SMTP_PORT_RANGE, SettingsError::SmtpPortOutOfRange)?;
        check_range(
            self.session_timeout_minutes,
            SESSION_TIMEOUT_RANGE,
            SettingsError::SessionTimeoutOutOfRange,
        )?;
        check_range(
            self.max_login_attempts,
            LOGIN_ATTEMPTS_RANGE,
            SettingsError::LoginAttemptsOutOfRange,
        )?;
        check_range(self.retention_days, RETENTION_DAYS_RANGE, SettingsError::RetentionOutOfRange)?;
        Ok(())
    }
}

fn check_range(
    value: u32,
    range: RangeInclusive<u32>,
    err: fn(u32) -> SettingsError,
) -> Result<(), SettingsError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(err(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("company and system names are required")]
    NameRequired,
    #[error("SMTP port {0} is outside 1..=65535")]
    SmtpPortOutOfRange(u32),
    #[error("session timeout {0} is outside 5..=480 minutes")]
    SessionTimeoutOutOfRange(u32),
    #[error("max login attempts {0} is outside 1..=10")]
    LoginAttemptsOutOfRange(u32),
    #[error("retention {0} is outside 30..=2555 days")]
    RetentionOutOfRange(u32),
}

impl SettingsError {
    pub fn message_key(&self) -> TextKey {
        match self {
            SettingsError::NameRequired => TextKey::SettingsNameRequired,
            SettingsError::SmtpPortOutOfRange(_) => TextKey::SettingsPortRange,
            SettingsError::SessionTimeoutOutOfRange(_) => TextKey::SettingsTimeoutRange,
            SettingsError::LoginAttemptsOutOfRange(_) => TextKey::SettingsAttemptsRange,
            SettingsError::RetentionOutOfRange(_) => TextKey::SettingsRetentionRange,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(SystemSettings::default().validate(), Ok(()));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let ok = SystemSettings {
            smtp_port: 65535,
            session_timeout_minutes: 5,
            max_login_attempts: 10,
            retention_days: 2555,
            ..Default::default()
        };
        assert_eq!(ok.validate(), Ok(()));

        let bad = SystemSettings { smtp_port: 0, ..Default::default() };
        assert_eq!(bad.validate(), Err(SettingsError::SmtpPortOutOfRange(0)));
        let bad = SystemSettings { session_timeout_minutes: 481, ..Default::default() };
        assert_eq!(bad.validate(), Err(SettingsError::SessionTimeoutOutOfRange(481)));
        let bad = SystemSettings { max_login_attempts: 0, ..Default::default() };
        assert_eq!(bad.validate(), Err(SettingsError::LoginAttemptsOutOfRange(0)));
        let bad = SystemSettings { retention_days: 29, ..Default::default() };
        assert_eq!(bad.validate(), Err(SettingsError::RetentionOutOfRange(29)));
    }

    #[test]
    fn test_blank_names_rejected() {
        let bad = SystemSettings { system_name: "  ".into(), ..Default::default() };
        assert_eq!(bad.validate(), Err(SettingsError::NameRequired));
    }
}
