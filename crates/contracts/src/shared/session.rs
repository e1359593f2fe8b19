//! Per-session state and the actions that mutate it.
//!
//! One `SessionState` exists per session. The UI never edits it directly:
//! every user action goes through [`SessionState::apply`], after which the
//! whole view is rendered again from the new state.

use crate::dashboards::d401_reports::{ReportEntry, ReportPeriod, ReportType};
use crate::domain::a001_record::aggregate::Record;
use crate::domain::a001_record::filter::{RecordField, RecordFilter};
use crate::domain::a001_record::form::{FieldError, RecordForm, RecordFormError, SubmitAction};
use crate::shared::config::{AppConfig, AppInfo};
use crate::shared::i18n::{Language, TextKey};
use crate::shared::list_utils::SortState;
use crate::shared::navigation::{NavState, Page};
use crate::shared::sample_data::{sample_records, sample_report_history, sample_tickets, sample_users};
use crate::shared::style::{FontSize, Theme};
use crate::system::auth::{AuthError, CredentialTable, LoginRequest};
use crate::system::settings::{SettingsError, SystemSettings};
use crate::system::support::{Ticket, TicketDraft, TicketError};
use crate::system::users::{User, UserFilter};
use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

// ============================================================================
// Widget store
// ============================================================================

/// Keys of the per-widget selections kept in [`SessionStore`]
pub mod keys {
    pub const ADMIN_TAB: &str = "admin.tab";
    pub const TRAINING_TAB: &str = "training.tab";
    pub const REPORT_TYPE: &str = "reports.type";
    pub const REPORT_PERIOD: &str = "reports.period";
    pub const SELECTED_RECORD: &str = "records.selected";
    pub const GUIDE_SECTION: &str = "training.guide_section";
    pub const FAQ_CATEGORY: &str = "training.faq_category";
    pub const FAQ_SEARCH: &str = "training.faq_search";
    pub const BACKUP_SCHEDULE: &str = "admin.backup_schedule";
    pub const BACKUP_FILE: &str = "admin.backup_file";
}

/// String-keyed session values
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionStore {
    values: HashMap<String, Value>,
}

impl SessionStore {
    /// Current value, or `default` installed on first access.
    /// A stored value of another shape counts as a miss.
    pub fn get<T: Serialize + DeserializeOwned>(&mut self, key: &str, default: T) -> T {
        if let Some(value) = self.values.get(key) {
            if let Ok(current) = serde_json::from_value(value.clone()) {
                return current;
            }
        }
        match serde_json::to_value(&default) {
            Ok(value) => {
                self.values.insert(key.to_string(), value);
            }
            Err(e) => log::warn!("session store: cannot store default for {}: {}", key, e),
        }
        default
    }

    pub fn set<T: Serialize>(&mut self, key: &str, value: T) {
        match serde_json::to_value(value) {
            Ok(value) => self.set_value(key, value),
            Err(e) => log::warn!("session store: cannot store {}: {}", key, e),
        }
    }

    pub fn set_value(&mut self, key: &str, value: Value) {
        self.values.insert(key.to_string(), value);
    }

    /// Read without installing anything
    pub fn peek<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.values
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn peek_string(&self, key: &str) -> Option<String> {
        self.peek::<String>(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

// ============================================================================
// Notices
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

/// The one inline message produced by the last action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub key: TextKey,
    /// Untranslated value appended to the message, e.g. a ticket id
    pub detail: Option<String>,
}

impl Notice {
    pub fn new(kind: NoticeKind, key: TextKey) -> Self {
        Self { kind, key, detail: None }
    }

    pub fn with_detail(kind: NoticeKind, key: TextKey, detail: impl Into<String>) -> Self {
        Self {
            kind,
            key,
            detail: Some(detail.into()),
        }
    }
}

// ============================================================================
// Actions
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Action {
    Navigate(Page),
    Login(LoginRequest),
    Logout,
    SetTheme(Theme),
    SetLanguage(Language),
    SetFontSize(FontSize),
    SetRecordFilter(RecordFilter),
    /// Column header click
    SortRecords(RecordField),
    SetUserFilter(UserFilter),
    SubmitRecord { form: RecordForm, action: SubmitAction },
    GenerateReport { at: NaiveDateTime },
    SaveSettings(SystemSettings),
    StartBackup,
    FinishBackup,
    RestoreBackup,
    SubmitTicket { ticket: TicketDraft, today: NaiveDate },
    SetWidget { key: String, value: Value },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Form(#[from] RecordFormError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Ticket(#[from] TicketError),
    #[error("action requires a logged-in session")]
    NotLoggedIn,
}

// ============================================================================
// Session state
// ============================================================================

/// Records page filter and column sort
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordView {
    pub filter: RecordFilter,
    pub sort: Option<SortState<RecordField>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub nav: NavState,
    pub current_user: Option<String>,
    pub theme: Theme,
    pub language: Language,
    pub font_size: FontSize,
    pub records: Vec<Record>,
    pub users: Vec<User>,
    pub record_view: RecordView,
    pub user_filter: UserFilter,
    pub settings: SystemSettings,
    pub reports: Vec<ReportEntry>,
    pub tickets: Vec<Ticket>,
    pub backup_running: bool,
    pub notice: Option<Notice>,
    pub form_errors: Vec<FieldError>,
    pub widgets: SessionStore,
    pub app: AppInfo,
}

impl SessionState {
    /// New session with the configured defaults and the sample collections
    pub fn start(config: &AppConfig) -> Self {
        log::info!(
            "session started (theme={}, language={})",
            config.session.theme.as_str(),
            config.session.language.code()
        );
        Self {
            nav: NavState::default(),
            current_user: None,
            theme: config.session.theme,
            language: config.session.language,
            font_size: config.session.font_size,
            records: sample_records(),
            users: sample_users(),
            record_view: RecordView::default(),
            user_filter: UserFilter::default(),
            settings: config.system.clone(),
            reports: sample_report_history(),
            tickets: sample_tickets(),
            backup_running: false,
            notice: None,
            form_errors: Vec::new(),
            widgets: SessionStore::default(),
            app: config.app.clone(),
        }
    }

    /// Discard the session
    pub fn end(self) {
        log::info!(
            "session ended ({} records, user {:?})",
            self.records.len(),
            self.current_user
        );
    }

    pub fn is_logged_in(&self) -> bool {
        self.nav.is_logged_in()
    }

    /// Directory entry of the logged-in user, if the name is known
    pub fn current_user_entry(&self) -> Option<&User> {
        let name = self.current_user.as_deref()?;
        self.users.iter().find(|u| u.name == name)
    }

    /// Apply one user action. Any previous notice and field errors are cleared first.
    pub fn apply(&mut self, action: Action, credentials: &CredentialTable) -> Result<(), ActionError> {
        self.notice = None;
        self.form_errors.clear();

        match action {
            Action::Navigate(page) => {
                if self.nav.navigate(page) {
                    log::debug!("navigate to {}", page.code());
                }
                Ok(())
            }
            Action::Login(request) => self.login(&request, credentials),
            Action::Logout => {
                self.logout();
                Ok(())
            }
            Action::SetTheme(theme) => {
                self.theme = theme;
                Ok(())
            }
            Action::SetLanguage(language) => {
                self.language = language;
                Ok(())
            }
            Action::SetFontSize(font_size) => {
                self.font_size = font_size;
                Ok(())
            }
            Action::SetRecordFilter(filter) => {
                self.require_login()?;
                self.record_view.filter = filter;
                Ok(())
            }
            Action::SortRecords(field) => {
                self.require_login()?;
                self.record_view.sort = Some(SortState::toggle(self.record_view.sort, field));
                Ok(())
            }
            Action::SetUserFilter(filter) => {
                self.require_login()?;
                self.user_filter = filter;
                Ok(())
            }
            Action::SubmitRecord { form, action } => self.submit_record(&form, action),
            Action::GenerateReport { at } => self.generate_report(at),
            Action::SaveSettings(settings) => self.save_settings(settings),
            Action::StartBackup => {
                self.require_login()?;
                if self.backup_running {
                    log::debug!("backup already running");
                } else {
                    log::info!("backup started");
                    self.backup_running = true;
                    self.notice = Some(Notice::new(NoticeKind::Info, TextKey::BackupStarted));
                }
                Ok(())
            }
            Action::FinishBackup => {
                if self.backup_running {
                    log::info!("backup completed");
                    self.backup_running = false;
                    self.notice = Some(Notice::new(NoticeKind::Success, TextKey::BackupCompleted));
                }
                Ok(())
            }
            Action::RestoreBackup => {
                self.require_login()?;
                self.notice = Some(Notice::new(NoticeKind::Warning, TextKey::RestoreWarning));
                Ok(())
            }
            Action::SubmitTicket { ticket, today } => self.submit_ticket(&ticket, today),
            Action::SetWidget { key, value } => {
                self.require_login()?;
                log::debug!("widget {} = {}", key, value);
                self.widgets.set_value(&key, value);
                Ok(())
            }
        }
    }

    fn require_login(&mut self) -> Result<(), ActionError> {
        if self.is_logged_in() {
            return Ok(());
        }
        log::warn!("action rejected: not logged in");
        self.notice = Some(Notice::new(NoticeKind::Error, TextKey::NotLoggedIn));
        Err(ActionError::NotLoggedIn)
    }

    fn login(&mut self, request: &LoginRequest, credentials: &CredentialTable) -> Result<(), ActionError> {
        match credentials.check(request) {
            Ok(info) => {
                log::info!("user {} logged in as {}", info.username, info.display_name);
                self.nav.login();
                self.notice = Some(Notice::with_detail(
                    NoticeKind::Success,
                    TextKey::Welcome,
                    info.display_name.clone(),
                ));
                self.current_user = Some(info.display_name);
                Ok(())
            }
            Err(e) => {
                log::warn!("login failed for {}", request.username);
                self.notice = Some(Notice::new(NoticeKind::Error, TextKey::LoginFailed));
                Err(e.into())
            }
        }
    }

    fn logout(&mut self) {
        if !self.is_logged_in() {
            return;
        }
        log::info!("user {:?} logged out", self.current_user);
        self.nav.logout();
        self.current_user = None;
        self.notice = Some(Notice::new(NoticeKind::Info, TextKey::LoggedOut));
    }

    fn submit_record(&mut self, form: &RecordForm, action: SubmitAction) -> Result<(), ActionError> {
        self.require_login()?;
        if action == SubmitAction::Cancel {
            self.nav.navigate(Page::Records);
            return Ok(());
        }

        let assigned = self.current_user.clone().unwrap_or_default();
        match form.build_record(action, &assigned, &self.records) {
            Ok(record) => {
                log::info!("record {} created ({:?})", record.id, action);
                let id = record.id.to_string();
                self.records.push(record);
                let notice = match action {
                    SubmitAction::Save => {
                        self.nav.navigate(Page::Records);
                        Notice::with_detail(NoticeKind::Success, TextKey::RecordSaved, id)
                    }
                    SubmitAction::SaveAndContinue => {
                        Notice::with_detail(NoticeKind::Info, TextKey::ReadyForAnother, id)
                    }
                    SubmitAction::SaveAsDraft | SubmitAction::Cancel => {
                        Notice::with_detail(NoticeKind::Success, TextKey::RecordSaved, id)
                    }
                };
                self.notice = Some(notice);
                Ok(())
            }
            Err(err) => {
                log::warn!("record rejected: {}", err);
                self.form_errors = err.errors.clone();
                self.notice = Some(Notice::new(NoticeKind::Error, TextKey::FormIncomplete));
                Err(err.into())
            }
        }
    }

    /// Report type and period currently picked on the reports page
    pub fn report_selection(&self) -> (ReportType, ReportPeriod) {
        let report_type = self
            .widgets
            .peek_string(keys::REPORT_TYPE)
            .and_then(|c| ReportType::from_code(&c))
            .unwrap_or(ReportType::UsageAnalytics);
        let period = self
            .widgets
            .peek_string(keys::REPORT_PERIOD)
            .and_then(|c| ReportPeriod::from_code(&c))
            .unwrap_or(ReportPeriod::Last7Days);
        (report_type, period)
    }

    fn generate_report(&mut self, at: NaiveDateTime) -> Result<(), ActionError> {
        self.require_login()?;
        let (report_type, period) = self.report_selection();
        let entry = ReportEntry::generated(report_type, period, at);
        log::info!("report generated: {}", entry.name);
        self.notice = Some(Notice::with_detail(
            NoticeKind::Success,
            TextKey::ReportGenerated,
            entry.name.clone(),
        ));
        self.reports.insert(0, entry);
        Ok(())
    }

    fn save_settings(&mut self, settings: SystemSettings) -> Result<(), ActionError> {
        self.require_login()?;
        match settings.validate() {
            Ok(()) => {
                log::info!("system settings saved");
                self.settings = settings;
                self.notice = Some(Notice::new(NoticeKind::Success, TextKey::SettingsSaved));
                Ok(())
            }
            Err(e) => {
                log::warn!("settings rejected: {}", e);
                self.notice = Some(Notice::new(NoticeKind::Error, e.message_key()));
                Err(e.into())
            }
        }
    }

    fn submit_ticket(&mut self, draft: &TicketDraft, today: NaiveDate) -> Result<(), ActionError> {
        self.require_login()?;
        match draft.submit(&self.tickets, today) {
            Ok(ticket) => {
                log::info!("support ticket {} submitted", ticket.id);
                self.notice = Some(Notice::with_detail(
                    NoticeKind::Success,
                    TextKey::TicketSubmitted,
                    ticket.id.clone(),
                ));
                self.tickets.push(ticket);
                Ok(())
            }
            Err(e) => {
                log::warn!("ticket rejected: {}", e);
                self.notice = Some(Notice::new(NoticeKind::Error, e.message_key()));
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_record::aggregate::{Category, RecordStatus};
    use crate::shared::config::load_config;
    use crate::shared::list_utils::Choice;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 22).unwrap()
    }

    fn setup() -> (SessionState, CredentialTable) {
        let config = load_config().unwrap();
        (SessionState::start(&config), config.credential_table())
    }

    fn logged_in() -> (SessionState, CredentialTable) {
        let (mut state, creds) = setup();
        state
            .apply(Action::Login(LoginRequest::new("demo", "demo")), &creds)
            .unwrap();
        (state, creds)
    }

    fn form(title: &str, category: Option<Category>) -> RecordForm {
        RecordForm {
            title: title.into(),
            category,
            ..RecordForm::blank(today())
        }
    }

    #[test]
    fn test_session_store_get_installs_default_once() {
        let mut store = SessionStore::default();
        assert_eq!(store.get("tab", "users".to_string()), "users");
        assert!(store.contains("tab"));
        assert_eq!(store.get("tab", "backup".to_string()), "users");
        store.set("tab", "security");
        assert_eq!(store.peek_string("tab").as_deref(), Some("security"));
    }

    #[test]
    fn test_session_store_shape_mismatch_is_a_miss() {
        let mut store = SessionStore::default();
        store.set("count", "three");
        assert_eq!(store.get("count", 3u32), 3);
        assert_eq!(store.peek::<u32>("count"), Some(3));
        assert_eq!(store.peek::<u32>("missing"), None);
    }

    #[test]
    fn test_demo_login() {
        let (state, _) = logged_in();
        assert!(state.is_logged_in());
        assert_eq!(state.current_user.as_deref(), Some("John Smith"));
        assert_eq!(state.current_user_entry().map(|u| u.email.as_str()), Some("john.smith@company.com"));
    }

    #[test]
    fn test_wrong_password_gives_exactly_one_error() {
        let (mut state, creds) = setup();
        let result = state.apply(Action::Login(LoginRequest::new("demo", "wrong")), &creds);
        assert_eq!(result, Err(ActionError::Auth(AuthError::InvalidCredentials)));
        assert!(!state.is_logged_in());
        assert_eq!(state.notice, Some(Notice::new(NoticeKind::Error, TextKey::LoginFailed)));
        assert!(state.form_errors.is_empty());
    }

    #[test]
    fn test_notice_cleared_by_next_action() {
        let (mut state, creds) = setup();
        let _ = state.apply(Action::Login(LoginRequest::new("demo", "wrong")), &creds);
        state.apply(Action::SetTheme(Theme::Light), &creds).unwrap();
        assert_eq!(state.notice, None);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_logout_clears_user_and_keeps_page() {
        let (mut state, creds) = logged_in();
        state.apply(Action::Navigate(Page::Training), &creds).unwrap();
        state.apply(Action::Logout, &creds).unwrap();
        assert!(!state.is_logged_in());
        assert_eq!(state.current_user, None);
        assert_eq!(state.nav.page, Page::Training);

        state.apply(Action::Navigate(Page::Admin), &creds).unwrap();
        assert_eq!(state.nav.page, Page::Training);
    }

    #[test]
    fn test_empty_title_rejected_without_mutation() {
        let (mut state, creds) = logged_in();
        let before = state.records.clone();
        let result = state.apply(
            Action::SubmitRecord {
                form: form("", Some(Category::Legal)),
                action: SubmitAction::Save,
            },
            &creds,
        );
        assert!(matches!(result, Err(ActionError::Form(_))));
        assert_eq!(state.records, before);
        assert_eq!(state.form_errors, vec![FieldError::TitleRequired]);
        assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[test]
    fn test_whitespace_title_appends_one_record() {
        let (mut state, creds) = logged_in();
        let before = state.records.len();
        state
            .apply(
                Action::SubmitRecord {
                    form: form(" ", Some(Category::Legal)),
                    action: SubmitAction::Save,
                },
                &creds,
            )
            .unwrap();
        assert_eq!(state.records.len(), before + 1);
        assert!(state.form_errors.is_empty());
    }

    #[test]
    fn test_save_appends_and_navigates() {
        let (mut state, creds) = logged_in();
        state.apply(Action::Navigate(Page::AddRecord), &creds).unwrap();
        let before = state.records.len();
        state
            .apply(
                Action::SubmitRecord {
                    form: form("Vendor NDA", Some(Category::Client)),
                    action: SubmitAction::Save,
                },
                &creds,
            )
            .unwrap();
        assert_eq!(state.records.len(), before + 1);
        let record = state.records.last().unwrap();
        assert_eq!(record.id.as_str(), "IMS-005");
        assert_eq!(record.created, today());
        assert_eq!(record.modified, today());
        assert_eq!(record.status, RecordStatus::Draft);
        assert_eq!(record.assigned, "John Smith");
        assert_eq!(state.nav.page, Page::Records);
    }

    #[test]
    fn test_save_and_continue_and_draft_stay_on_form() {
        let (mut state, creds) = logged_in();
        state.apply(Action::Navigate(Page::AddRecord), &creds).unwrap();
        state
            .apply(
                Action::SubmitRecord {
                    form: form("One", Some(Category::Legal)),
                    action: SubmitAction::SaveAndContinue,
                },
                &creds,
            )
            .unwrap();
        assert_eq!(state.nav.page, Page::AddRecord);
        assert_eq!(state.notice.as_ref().map(|n| n.key), Some(TextKey::ReadyForAnother));

        state
            .apply(
                Action::SubmitRecord {
                    form: form("Two", Some(Category::Legal)),
                    action: SubmitAction::SaveAsDraft,
                },
                &creds,
            )
            .unwrap();
        assert_eq!(state.nav.page, Page::AddRecord);
        let ids: Vec<&str> = state.records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(&ids[4..], &["IMS-005", "IMS-006"]);
    }

    #[test]
    fn test_cancel_does_not_mutate() {
        let (mut state, creds) = logged_in();
        state.apply(Action::Navigate(Page::AddRecord), &creds).unwrap();
        let before = state.records.clone();
        state
            .apply(
                Action::SubmitRecord {
                    form: form("Ignored", Some(Category::Legal)),
                    action: SubmitAction::Cancel,
                },
                &creds,
            )
            .unwrap();
        assert_eq!(state.records, before);
        assert_eq!(state.nav.page, Page::Records);
    }

    #[test]
    fn test_submit_while_logged_out_rejected() {
        let (mut state, creds) = setup();
        let before = state.records.clone();
        let result = state.apply(
            Action::SubmitRecord {
                form: form("Sneaky", Some(Category::Legal)),
                action: SubmitAction::Save,
            },
            &creds,
        );
        assert_eq!(result, Err(ActionError::NotLoggedIn));
        assert_eq!(state.records, before);
    }

    #[test]
    fn test_sort_records_toggles_direction() {
        let (mut state, creds) = logged_in();
        state.apply(Action::SortRecords(RecordField::Priority), &creds).unwrap();
        assert_eq!(state.record_view.sort.map(|s| s.ascending), Some(true));
        state.apply(Action::SortRecords(RecordField::Priority), &creds).unwrap();
        assert_eq!(state.record_view.sort.map(|s| s.ascending), Some(false));
    }

    #[test]
    fn test_record_filter_is_stored() {
        let (mut state, creds) = logged_in();
        let filter = RecordFilter::new(Choice::Only(Category::Legal), Choice::All, "abc");
        state.apply(Action::SetRecordFilter(filter.clone()), &creds).unwrap();
        assert_eq!(state.record_view.filter, filter);
    }

    #[test]
    fn test_generate_report_prepends_history() {
        let (mut state, creds) = logged_in();
        state
            .apply(
                Action::SetWidget {
                    key: keys::REPORT_TYPE.into(),
                    value: Value::String("security-audit".into()),
                },
                &creds,
            )
            .unwrap();
        let at = today().and_hms_opt(9, 0, 0).unwrap();
        state.apply(Action::GenerateReport { at }, &creds).unwrap();
        assert_eq!(state.reports.len(), 4);
        assert_eq!(state.reports[0].name, "Security Audit (Last 7 days)");
        assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Success));
    }

    #[test]
    fn test_save_settings_validates() {
        let (mut state, creds) = logged_in();
        let bad = SystemSettings { smtp_port: 70000, ..SystemSettings::default() };
        let result = state.apply(Action::SaveSettings(bad), &creds);
        assert_eq!(result, Err(ActionError::Settings(SettingsError::SmtpPortOutOfRange(70000))));
        assert_eq!(state.settings.smtp_port, 587);

        let good = SystemSettings { smtp_port: 2525, ..SystemSettings::default() };
        state.apply(Action::SaveSettings(good), &creds).unwrap();
        assert_eq!(state.settings.smtp_port, 2525);
        assert_eq!(state.notice.map(|n| n.key), Some(TextKey::SettingsSaved));
    }

    #[test]
    fn test_backup_lifecycle() {
        let (mut state, creds) = logged_in();
        state.apply(Action::StartBackup, &creds).unwrap();
        assert!(state.backup_running);
        state.apply(Action::StartBackup, &creds).unwrap();
        assert!(state.backup_running);
        assert_eq!(state.notice, None);
        state.apply(Action::FinishBackup, &creds).unwrap();
        assert!(!state.backup_running);
        assert_eq!(state.notice.as_ref().map(|n| n.key), Some(TextKey::BackupCompleted));

        state.apply(Action::RestoreBackup, &creds).unwrap();
        assert_eq!(state.notice.map(|n| n.kind), Some(NoticeKind::Warning));
    }

    #[test]
    fn test_submit_ticket() {
        let (mut state, creds) = logged_in();
        let draft = TicketDraft { subject: "Export fails".into(), ..Default::default() };
        state
            .apply(Action::SubmitTicket { ticket: draft, today: today() }, &creds)
            .unwrap();
        assert_eq!(state.tickets.len(), 3);
        assert_eq!(
            state.notice.as_ref().and_then(|n| n.detail.as_deref()),
            Some("IMS-2024-003")
        );

        let empty = TicketDraft::default();
        let result = state.apply(Action::SubmitTicket { ticket: empty, today: today() }, &creds);
        assert_eq!(result, Err(ActionError::Ticket(TicketError::SubjectRequired)));
        assert_eq!(state.tickets.len(), 3);
    }

    #[test]
    fn test_end_consumes_session() {
        let (state, _) = setup();
        state.end();
    }
}
