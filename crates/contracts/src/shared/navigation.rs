//! Page × login state machine.

use crate::shared::i18n::TextKey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Dashboard,
    Records,
    AddRecord,
    Reports,
    Admin,
    Training,
}

impl Page {
    pub fn all() -> [Page; 6] {
        [
            Page::Dashboard,
            Page::Records,
            Page::AddRecord,
            Page::Reports,
            Page::Admin,
            Page::Training,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Records => "records",
            Page::AddRecord => "add-record",
            Page::Reports => "reports",
            Page::Admin => "admin",
            Page::Training => "training",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }

    /// Sidebar label
    pub fn label_key(&self) -> TextKey {
        match self {
            Page::Dashboard => TextKey::NavDashboard,
            Page::Records => TextKey::NavRecords,
            Page::AddRecord => TextKey::NavAddRecord,
            Page::Reports => TextKey::NavReports,
            Page::Admin => TextKey::NavAdmin,
            Page::Training => TextKey::NavTraining,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuthStatus {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Current page and login flag. Starts at {Dashboard, LoggedOut}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavState {
    pub page: Page,
    pub auth: AuthStatus,
}

impl NavState {
    pub fn is_logged_in(&self) -> bool {
        self.auth == AuthStatus::LoggedIn
    }

    /// Move to `page`; ignored while logged out. Returns whether the state changed.
    pub fn navigate(&mut self, page: Page) -> bool {
        if !self.is_logged_in() || self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn login(&mut self) {
        self.auth = AuthStatus::LoggedIn;
    }

    /// Logging out keeps the page so the next login returns to it
    pub fn logout(&mut self) {
        self.auth = AuthStatus::LoggedOut;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AdminTab {
    #[default]
    Users,
    Settings,
    Security,
    Backup,
}

impl AdminTab {
    pub fn all() -> [AdminTab; 4] {
        [AdminTab::Users, AdminTab::Settings, AdminTab::Security, AdminTab::Backup]
    }

    pub fn code(&self) -> &'static str {
        match self {
            AdminTab::Users => "users",
            AdminTab::Settings => "settings",
            AdminTab::Security => "security",
            AdminTab::Backup => "backup",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }

    pub fn label_key(&self) -> TextKey {
        match self {
            AdminTab::Users => TextKey::TabUsers,
            AdminTab::Settings => TextKey::TabSettings,
            AdminTab::Security => TextKey::TabSecurity,
            AdminTab::Backup => TextKey::TabBackup,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrainingTab {
    #[default]
    Guide,
    Modules,
    QuickReference,
    Faq,
    Support,
}

impl TrainingTab {
    pub fn all() -> [TrainingTab; 5] {
        [
            TrainingTab::Guide,
            TrainingTab::Modules,
            TrainingTab::QuickReference,
            TrainingTab::Faq,
            TrainingTab::Support,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            TrainingTab::Guide => "guide",
            TrainingTab::Modules => "modules",
            TrainingTab::QuickReference => "quick-reference",
            TrainingTab::Faq => "faq",
            TrainingTab::Support => "support",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }

    pub fn label_key(&self) -> TextKey {
        match self {
            TrainingTab::Guide => TextKey::TabGuide,
            TrainingTab::Modules => TextKey::TabModules,
            TrainingTab::QuickReference => TextKey::TabQuickReference,
            TrainingTab::Faq => TextKey::TabFaq,
            TrainingTab::Support => TextKey::TabSupport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let nav = NavState::default();
        assert_eq!(nav.page, Page::Dashboard);
        assert!(!nav.is_logged_in());
    }

    #[test]
    fn test_navigation_ignored_while_logged_out() {
        let mut nav = NavState::default();
        assert!(!nav.navigate(Page::Admin));
        assert_eq!(nav.page, Page::Dashboard);
    }

    #[test]
    fn test_any_page_reachable_when_logged_in() {
        let mut nav = NavState::default();
        nav.login();
        for from in Page::all() {
            for to in Page::all() {
                nav.page = from;
                nav.navigate(to);
                assert_eq!(nav.page, to);
            }
        }
    }

    #[test]
    fn test_logout_keeps_page() {
        let mut nav = NavState::default();
        nav.login();
        nav.navigate(Page::Reports);
        nav.logout();
        assert_eq!(nav.auth, AuthStatus::LoggedOut);
        nav.login();
        assert_eq!(nav.page, Page::Reports);
    }

    #[test]
    fn test_codes() {
        for page in Page::all() {
            assert_eq!(Page::from_code(page.code()), Some(page));
        }
        assert_eq!(AdminTab::from_code("backup"), Some(AdminTab::Backup));
        assert_eq!(TrainingTab::from_code("videos"), None);
    }
}
