//! Pure renderer: (session state, reference data) → view tree.
//!
//! Every label is resolved through the translation table here, so the UI
//! layer only lays the tree out. Data values (records, users, reference
//! content) pass through untranslated.

use crate::dashboards::d400_overview::dto::{ChartKind, ChartPoint, ChartSeries, Metric};
use crate::dashboards::d401_reports::{ReportPeriod, ReportType};
use crate::domain::a001_record::aggregate::{next_record_id, Category, Priority, RecordStatus};
use crate::domain::a001_record::filter::{query_records, RecordField};
use crate::domain::a001_record::form::{InitialStatus, DEPARTMENTS};
use crate::shared::i18n::{Language, TextKey, Translator};
use crate::shared::list_utils::{SortState, ALL};
use crate::shared::navigation::{AdminTab, Page, TrainingTab};
use crate::shared::sample_data::ReferenceData;
use crate::shared::session::{keys, Notice, NoticeKind, SessionState};
use crate::shared::style::{style_for, FontSize, StyleBundle, Theme};
use crate::system::settings::{
    SystemSettings, BACKUP_FREQUENCIES, DEFAULT_LANGUAGES, PASSWORD_POLICIES, TIME_ZONES,
};
use crate::system::support::{ISSUE_TYPES, TICKET_PRIORITIES};
use crate::system::training::{
    completion_ratio, faq_for_category, find_section, search_faq, FaqEntry, FAQ_CATEGORIES,
};
use crate::system::users::{filter_users, Role, UserStatus};
use serde::{Deserialize, Serialize};

// ============================================================================
// Building blocks
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionView {
    pub value: String,
    pub label: String,
}

impl OptionView {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectView {
    pub label: String,
    pub value: String,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputView {
    pub label: String,
    pub value: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricView {
    pub label: String,
    pub value: String,
    pub delta: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartView {
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
    pub max: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnView {
    pub label: String,
    /// Column code when the header is clickable for sorting
    pub sort_key: Option<String>,
    pub sort_indicator: String,
    /// Cells are drawn as status badges
    pub badge: bool,
}

impl ColumnView {
    fn text(label: String) -> Self {
        Self {
            label,
            sort_key: None,
            sort_indicator: String::new(),
            badge: false,
        }
    }

    fn badge(label: String) -> Self {
        Self {
            badge: true,
            ..Self::text(label)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub columns: Vec<ColumnView>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledTable {
    pub title: String,
    pub table: TableView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabView {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeView {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorView {
    pub field: String,
    pub text: String,
}

// ============================================================================
// Tree
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewTree {
    pub style: StyleBundle,
    pub language: Language,
    pub body: ViewBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewBody {
    /// Logged out: nothing but the login view
    Login(LoginView),
    App(Box<AppView>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferencesView {
    pub title: String,
    pub theme: SelectView,
    pub language: SelectView,
    pub font_size: SelectView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginView {
    pub app_title: String,
    pub title: String,
    pub username_label: String,
    pub password_label: String,
    pub submit_label: String,
    pub hint: String,
    pub notice: Option<NoticeView>,
    pub preferences: PreferencesView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderView {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub page: Page,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCardView {
    pub title: String,
    pub name: String,
    pub role: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppView {
    pub header: HeaderView,
    pub nav_title: String,
    pub nav: Vec<NavItem>,
    pub user_card: UserCardView,
    pub quick_stats_title: String,
    pub quick_stats: Vec<MetricView>,
    pub preferences: PreferencesView,
    pub logout_label: String,
    pub notice: Option<NoticeView>,
    pub page: PageView,
    pub footer: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageView {
    Dashboard(DashboardView),
    Records(RecordsView),
    AddRecord(AddRecordView),
    Reports(ReportsView),
    Admin(AdminView),
    Training(TrainingView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub title: String,
    pub metrics: Vec<MetricView>,
    pub category_chart: ChartView,
    pub timeline_chart: ChartView,
    pub recent: TitledTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickActionsView {
    pub title: String,
    pub select: SelectView,
    /// Rendered but not wired to anything
    pub buttons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordsView {
    pub title: String,
    pub search: InputView,
    pub category: SelectView,
    pub status: SelectView,
    pub refresh_label: String,
    pub add_label: String,
    pub toolbar: Vec<String>,
    pub table_title: String,
    pub table: TableView,
    pub match_count: String,
    pub empty_text: Option<String>,
    pub quick_actions: Option<QuickActionsView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRecordView {
    pub title: String,
    pub subtitle: String,
    pub basic_title: String,
    pub title_field: InputView,
    pub record_id_label: String,
    pub next_id: String,
    pub category: SelectView,
    pub priority: SelectView,
    pub description_label: String,
    pub start_label: String,
    pub end_label: String,
    pub tags: InputView,
    pub access_title: String,
    pub visibility_label: String,
    pub visibility: Vec<OptionView>,
    pub assign_label: String,
    pub assignable_users: Vec<String>,
    pub status: SelectView,
    pub department: SelectView,
    pub save_label: String,
    pub save_continue_label: String,
    pub draft_label: String,
    pub cancel_label: String,
    pub field_errors: Vec<FieldErrorView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportsView {
    pub title: String,
    pub report_type: SelectView,
    pub period: SelectView,
    pub generate_label: String,
    pub stats_title: String,
    pub stats: Vec<MetricView>,
    pub monthly: ChartView,
    pub user_activity: ChartView,
    pub history: TitledTable,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminView {
    pub title: String,
    pub selected_tab: String,
    pub tabs: Vec<TabView>,
    pub tab: AdminTabView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdminTabView {
    Users(UsersTabView),
    Settings(Box<SettingsTabView>),
    Security(SecurityTabView),
    Backup(BackupTabView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersTabView {
    pub title: String,
    pub role: SelectView,
    pub department: SelectView,
    pub status: SelectView,
    pub table: TableView,
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsLabels {
    pub company_name: String,
    pub system_name: String,
    pub time_zone: String,
    pub default_language: String,
    pub smtp_server: String,
    pub smtp_port: String,
    pub email_from: String,
    pub session_timeout: String,
    pub password_policy: String,
    pub two_factor: String,
    pub max_login_attempts: String,
    pub backup_frequency: String,
    pub retention_days: String,
    pub auto_archive: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsTabView {
    pub title: String,
    pub general_title: String,
    pub email_title: String,
    pub security_title: String,
    pub data_title: String,
    pub labels: SettingsLabels,
    pub settings: SystemSettings,
    pub time_zones: Vec<String>,
    pub languages: Vec<String>,
    pub password_policies: Vec<String>,
    pub backup_frequencies: Vec<String>,
    pub save_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityTabView {
    pub title: String,
    pub metrics: Vec<MetricView>,
    pub log: TitledTable,
    pub scan_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupTabView {
    pub title: String,
    pub last_backup: String,
    pub schedule: SelectView,
    pub run_label: String,
    pub running: bool,
    pub running_text: String,
    pub restore_title: String,
    pub file: SelectView,
    pub components_label: String,
    pub components: Vec<String>,
    pub restore_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingView {
    pub title: String,
    pub selected_tab: String,
    pub tabs: Vec<TabView>,
    pub tab: TrainingTabView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrainingTabView {
    Guide(GuideTabView),
    Modules(ModulesTabView),
    QuickReference(Vec<TitledTable>),
    Faq(FaqTabView),
    Support(SupportTabView),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideTabView {
    pub section: SelectView,
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModulesTabView {
    pub progress_title: String,
    pub metrics: Vec<MetricView>,
    /// Completed share, `0.0..=1.0`
    pub progress: f64,
    pub modules: TitledTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntryView {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqTabView {
    pub category: SelectView,
    pub entries: Vec<FaqEntryView>,
    pub search: InputView,
    /// Matches across every category; empty while the search box is empty
    pub search_results: Vec<FaqEntryView>,
    pub no_matches: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLine {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTabView {
    pub form_title: String,
    pub issue_type: SelectView,
    pub priority: SelectView,
    pub subject_label: String,
    pub description_label: String,
    pub submit_label: String,
    pub contact_title: String,
    pub contact: Vec<ContactLine>,
    pub stats_title: String,
    pub stats: Vec<MetricView>,
    pub tickets: TitledTable,
}

// ============================================================================
// Accessors
// ============================================================================

impl ViewTree {
    pub fn login(&self) -> Option<&LoginView> {
        match &self.body {
            ViewBody::Login(login) => Some(login),
            ViewBody::App(_) => None,
        }
    }

    pub fn app(&self) -> Option<&AppView> {
        match &self.body {
            ViewBody::App(app) => Some(app),
            ViewBody::Login(_) => None,
        }
    }

    pub fn page(&self) -> Option<&PageView> {
        self.app().map(|app| &app.page)
    }
}

impl PageView {
    pub fn page(&self) -> Page {
        match self {
            PageView::Dashboard(_) => Page::Dashboard,
            PageView::Records(_) => Page::Records,
            PageView::AddRecord(_) => Page::AddRecord,
            PageView::Reports(_) => Page::Reports,
            PageView::Admin(_) => Page::Admin,
            PageView::Training(_) => Page::Training,
        }
    }

    pub fn as_dashboard(&self) -> Option<&DashboardView> {
        match self {
            PageView::Dashboard(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_records(&self) -> Option<&RecordsView> {
        match self {
            PageView::Records(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_add_record(&self) -> Option<&AddRecordView> {
        match self {
            PageView::AddRecord(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_reports(&self) -> Option<&ReportsView> {
        match self {
            PageView::Reports(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_admin(&self) -> Option<&AdminView> {
        match self {
            PageView::Admin(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_training(&self) -> Option<&TrainingView> {
        match self {
            PageView::Training(v) => Some(v),
            _ => None,
        }
    }
}

impl AdminTabView {
    pub fn as_users(&self) -> Option<&UsersTabView> {
        match self {
            AdminTabView::Users(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_settings(&self) -> Option<&SettingsTabView> {
        match self {
            AdminTabView::Settings(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_security(&self) -> Option<&SecurityTabView> {
        match self {
            AdminTabView::Security(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_backup(&self) -> Option<&BackupTabView> {
        match self {
            AdminTabView::Backup(v) => Some(v),
            _ => None,
        }
    }
}

impl TrainingTabView {
    pub fn as_guide(&self) -> Option<&GuideTabView> {
        match self {
            TrainingTabView::Guide(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_modules(&self) -> Option<&ModulesTabView> {
        match self {
            TrainingTabView::Modules(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_quick_reference(&self) -> Option<&Vec<TitledTable>> {
        match self {
            TrainingTabView::QuickReference(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_faq(&self) -> Option<&FaqTabView> {
        match self {
            TrainingTabView::Faq(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_support(&self) -> Option<&SupportTabView> {
        match self {
            TrainingTabView::Support(v) => Some(v),
            _ => None,
        }
    }
}

// ============================================================================
// Render
// ============================================================================

pub fn render(state: &SessionState, reference: &ReferenceData) -> ViewTree {
    let r = Renderer {
        t: Translator::new(state.language),
        state,
        reference,
    };
    let body = if state.is_logged_in() {
        ViewBody::App(Box::new(r.app()))
    } else {
        ViewBody::Login(r.login())
    };
    ViewTree {
        style: style_for(state.theme, state.font_size),
        language: state.language,
        body,
    }
}

struct Renderer<'a> {
    t: Translator,
    state: &'a SessionState,
    reference: &'a ReferenceData,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn plain_options(items: &[&str]) -> Vec<OptionView> {
    items.iter().map(|s| OptionView::plain(*s)).collect()
}

impl<'a> Renderer<'a> {
    fn tr(&self, key: TextKey) -> String {
        self.t.t(key)
    }

    fn widget(&self, key: &str) -> Option<String> {
        self.state.widgets.peek_string(key)
    }

    fn notice(&self, notice: &Notice) -> NoticeView {
        let text = match &notice.detail {
            Some(detail) => format!("{} {}", self.tr(notice.key), detail),
            None => self.tr(notice.key),
        };
        NoticeView { kind: notice.kind, text }
    }

    fn metrics(&self, metrics: &[Metric]) -> Vec<MetricView> {
        metrics
            .iter()
            .map(|m| MetricView {
                label: self.tr(m.label),
                value: m.value.clone(),
                delta: m.delta.clone(),
            })
            .collect()
    }

    fn chart(&self, series: &ChartSeries) -> ChartView {
        ChartView {
            title: self.tr(series.title),
            kind: series.kind,
            points: series.points.clone(),
            max: series.max_value(),
            total: series.total(),
        }
    }

    fn columns(&self, keys: &[TextKey]) -> Vec<ColumnView> {
        keys.iter().map(|k| ColumnView::text(self.tr(*k))).collect()
    }

    /// "All" sentinel option followed by data values
    fn filter_select(&self, label: TextKey, value: String, values: &[&str]) -> SelectView {
        let mut options = vec![OptionView::new(ALL, self.tr(TextKey::AllOption))];
        options.extend(plain_options(values));
        SelectView {
            label: self.tr(label),
            value,
            options,
        }
    }

    fn preferences(&self) -> PreferencesView {
        PreferencesView {
            title: self.tr(TextKey::Preferences),
            theme: SelectView {
                label: self.tr(TextKey::Theme),
                value: self.state.theme.as_str().to_string(),
                options: Theme::all()
                    .iter()
                    .map(|th| OptionView::new(th.as_str(), self.tr(th.label_key())))
                    .collect(),
            },
            language: SelectView {
                label: self.tr(TextKey::Language),
                value: self.state.language.code().to_string(),
                options: Language::all()
                    .iter()
                    .map(|l| OptionView::new(l.code(), l.native_name()))
                    .collect(),
            },
            font_size: SelectView {
                label: self.tr(TextKey::FontSize),
                value: self.state.font_size.as_str().to_string(),
                options: FontSize::all()
                    .iter()
                    .map(|f| OptionView::new(f.as_str(), self.tr(f.label_key())))
                    .collect(),
            },
        }
    }

    fn login(&self) -> LoginView {
        LoginView {
            app_title: self.tr(TextKey::AppTitle),
            title: self.tr(TextKey::LoginTitle),
            username_label: self.tr(TextKey::Username),
            password_label: self.tr(TextKey::Password),
            submit_label: self.tr(TextKey::LoginButton),
            hint: self.tr(TextKey::LoginHint),
            notice: self.state.notice.as_ref().map(|n| self.notice(n)),
            preferences: self.preferences(),
        }
    }

    fn app(&self) -> AppView {
        let app = &self.state.app;
        let current = self.state.nav.page;
        let entry = self.state.current_user_entry();
        AppView {
            header: HeaderView {
                title: self.tr(TextKey::AppTitle),
                subtitle: format!(
                    "{} | {}: {} | {}: {}",
                    self.tr(TextKey::AppSubtitle),
                    self.tr(TextKey::ClientLabel),
                    app.company,
                    self.tr(TextKey::ProjectManagerLabel),
                    app.project_manager
                ),
            },
            nav_title: self.tr(TextKey::Navigation),
            nav: Page::all()
                .iter()
                .map(|p| NavItem {
                    page: *p,
                    label: self.tr(p.label_key()),
                    active: *p == current,
                })
                .collect(),
            user_card: UserCardView {
                title: self.tr(TextKey::CurrentUser),
                name: self.state.current_user.clone().unwrap_or_default(),
                role: entry.map(|u| u.role.as_str().to_string()).unwrap_or_default(),
                email: entry.map(|u| u.email.clone()).unwrap_or_default(),
            },
            quick_stats_title: self.tr(TextKey::QuickStats),
            quick_stats: self.metrics(&self.reference.quick_stats),
            preferences: self.preferences(),
            logout_label: self.tr(TextKey::Logout),
            notice: self.state.notice.as_ref().map(|n| self.notice(n)),
            page: self.page(current),
            footer: vec![
                format!("{} | {} {}", app.title, self.tr(TextKey::FooterVersion), app.version),
                format!("{} | {}", self.tr(TextKey::AppSubtitle), app.company),
                format!(
                    "{}: {} | {}: {}",
                    self.tr(TextKey::FooterSupport),
                    app.support_email,
                    self.tr(TextKey::FooterPhone),
                    app.support_phone
                ),
            ],
        }
    }

    fn page(&self, page: Page) -> PageView {
        match page {
            Page::Dashboard => PageView::Dashboard(self.dashboard()),
            Page::Records => PageView::Records(self.records()),
            Page::AddRecord => PageView::AddRecord(self.add_record()),
            Page::Reports => PageView::Reports(self.reports()),
            Page::Admin => PageView::Admin(self.admin()),
            Page::Training => PageView::Training(self.training()),
        }
    }

    // ------------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------------

    fn dashboard(&self) -> DashboardView {
        let reference = self.reference;
        let mut columns = self.columns(&[TextKey::ColAction, TextKey::ColUser, TextKey::ColTime]);
        columns.push(ColumnView::badge(self.tr(TextKey::ColStatus)));
        DashboardView {
            title: self.tr(TextKey::DashboardOverview),
            metrics: self.metrics(&reference.dashboard_metrics),
            category_chart: self.chart(&reference.category_chart),
            timeline_chart: self.chart(&reference.timeline_chart),
            recent: TitledTable {
                title: self.tr(TextKey::RecentActivity),
                table: TableView {
                    columns,
                    rows: reference
                        .recent_activity
                        .iter()
                        .map(|a| vec![a.action.clone(), a.user.clone(), a.time.clone(), a.status.clone()])
                        .collect(),
                },
            },
        }
    }

    // ------------------------------------------------------------------------
    // Records
    // ------------------------------------------------------------------------

    fn records(&self) -> RecordsView {
        let view = &self.state.record_view;
        let rows = query_records(&self.state.records, &view.filter, view.sort);
        let columns = RecordField::all()
            .iter()
            .map(|f| ColumnView {
                label: self.tr(f.header_key()),
                sort_key: Some(f.code().to_string()),
                sort_indicator: SortState::indicator(view.sort, *f).to_string(),
                badge: matches!(f, RecordField::Status | RecordField::Priority),
            })
            .collect();
        let table_rows: Vec<Vec<String>> = rows
            .iter()
            .map(|r| RecordField::all().iter().map(|f| f.cell(r)).collect())
            .collect();

        let categories: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
        let statuses: Vec<&str> = RecordStatus::all().iter().map(|s| s.as_str()).collect();

        let quick_actions = if rows.is_empty() {
            None
        } else {
            let ids: Vec<String> = rows.iter().map(|r| r.id.to_string()).collect();
            let selected = self
                .widget(keys::SELECTED_RECORD)
                .filter(|id| ids.contains(id))
                .unwrap_or_else(|| ids[0].clone());
            Some(QuickActionsView {
                title: self.tr(TextKey::QuickActions),
                select: SelectView {
                    label: self.tr(TextKey::SelectRecord),
                    value: selected,
                    options: ids.into_iter().map(OptionView::plain).collect(),
                },
                buttons: vec![
                    self.tr(TextKey::ViewDetails),
                    self.tr(TextKey::EditRecord),
                    self.tr(TextKey::Duplicate),
                    self.tr(TextKey::Delete),
                ],
            })
        };

        RecordsView {
            title: self.tr(TextKey::NavRecords),
            search: InputView {
                label: self.tr(TextKey::SearchRecords),
                value: view.filter.search.clone(),
                placeholder: self.tr(TextKey::SearchPlaceholder),
            },
            category: self.filter_select(
                TextKey::Category,
                view.filter.category.code_with(|c| c.as_str().to_string()),
                &categories,
            ),
            status: self.filter_select(
                TextKey::Status,
                view.filter.status.code_with(|s| s.as_str().to_string()),
                &statuses,
            ),
            refresh_label: self.tr(TextKey::Refresh),
            add_label: self.tr(TextKey::AddNewRecord),
            toolbar: vec![
                self.tr(TextKey::ExportData),
                self.tr(TextKey::BulkActions),
                self.tr(TextKey::AdvancedFilter),
            ],
            table_title: self.tr(TextKey::AllRecords),
            match_count: format!("{} {}", rows.len(), self.tr(TextKey::RecordsFound)),
            empty_text: rows.is_empty().then(|| self.tr(TextKey::NoRecords)),
            table: TableView {
                columns,
                rows: table_rows,
            },
            quick_actions,
        }
    }

    fn add_record(&self) -> AddRecordView {
        let mut category_options = vec![OptionView::new("", self.tr(TextKey::SelectCategory))];
        category_options.extend(
            Category::all()
                .iter()
                .map(|c| OptionView::new(c.as_str(), c.form_label())),
        );
        AddRecordView {
            title: self.tr(TextKey::NavAddRecord),
            subtitle: self.tr(TextKey::CreatingNewRecord),
            basic_title: self.tr(TextKey::BasicInformation),
            title_field: InputView {
                label: self.tr(TextKey::RecordTitle),
                value: String::new(),
                placeholder: self.tr(TextKey::RecordTitlePlaceholder),
            },
            record_id_label: self.tr(TextKey::RecordId),
            next_id: next_record_id(&self.state.records).to_string(),
            category: SelectView {
                label: self.tr(TextKey::CategoryField),
                value: String::new(),
                options: category_options,
            },
            priority: SelectView {
                label: self.tr(TextKey::PriorityLevel),
                value: Priority::Low.as_str().to_string(),
                options: Priority::all()
                    .iter()
                    .map(|p| OptionView::plain(p.as_str()))
                    .collect(),
            },
            description_label: self.tr(TextKey::Description),
            start_label: self.tr(TextKey::StartDate),
            end_label: self.tr(TextKey::EndDate),
            tags: InputView {
                label: self.tr(TextKey::Tags),
                value: String::new(),
                placeholder: "contract, client, important, Q1-2024".to_string(),
            },
            access_title: self.tr(TextKey::AccessPermissions),
            visibility_label: self.tr(TextKey::Visibility),
            visibility: vec![
                OptionView::new("public", self.tr(TextKey::VisPublic)),
                OptionView::new("restricted", self.tr(TextKey::VisRestricted)),
                OptionView::new("private", self.tr(TextKey::VisPrivate)),
            ],
            assign_label: self.tr(TextKey::AssignUsers),
            assignable_users: self.reference.assignable_users.clone(),
            status: SelectView {
                label: self.tr(TextKey::InitialStatus),
                value: InitialStatus::default().code().to_string(),
                options: InitialStatus::all()
                    .iter()
                    .map(|s| OptionView::new(s.code(), self.tr(s.label_key())))
                    .collect(),
            },
            department: SelectView {
                label: self.tr(TextKey::Department),
                value: DEPARTMENTS[0].to_string(),
                options: plain_options(&DEPARTMENTS),
            },
            save_label: self.tr(TextKey::SaveRecord),
            save_continue_label: self.tr(TextKey::SaveAndContinue),
            draft_label: self.tr(TextKey::SaveAsDraft),
            cancel_label: self.tr(TextKey::Cancel),
            field_errors: self
                .state
                .form_errors
                .iter()
                .map(|e| FieldErrorView {
                    field: e.field().to_string(),
                    text: self.tr(e.message_key()),
                })
                .collect(),
        }
    }

    // ------------------------------------------------------------------------
    // Reports
    // ------------------------------------------------------------------------

    fn reports(&self) -> ReportsView {
        let reference = self.reference;
        let (report_type, period) = self.state.report_selection();
        let mut columns = self.columns(&[TextKey::ColReportName, TextKey::ColType, TextKey::ColGenerated]);
        columns.push(ColumnView::badge(self.tr(TextKey::ColStatus)));
        columns.push(ColumnView::text(self.tr(TextKey::ColSize)));
        ReportsView {
            title: self.tr(TextKey::NavReports),
            report_type: SelectView {
                label: self.tr(TextKey::ReportType),
                value: report_type.code().to_string(),
                options: ReportType::all()
                    .iter()
                    .map(|t| OptionView::new(t.code(), t.display_name()))
                    .collect(),
            },
            period: SelectView {
                label: self.tr(TextKey::TimePeriod),
                value: period.code().to_string(),
                options: ReportPeriod::all()
                    .iter()
                    .map(|p| OptionView::new(p.code(), p.display_name()))
                    .collect(),
            },
            generate_label: self.tr(TextKey::GenerateReport),
            stats_title: self.tr(TextKey::QuickStatistics),
            stats: self.metrics(&reference.report_stats),
            monthly: self.chart(&reference.monthly_activity),
            user_activity: self.chart(&reference.user_activity),
            history: TitledTable {
                title: self.tr(TextKey::RecentReports),
                table: TableView {
                    columns,
                    rows: self
                        .state
                        .reports
                        .iter()
                        .map(|r| {
                            vec![
                                r.name.clone(),
                                r.kind.clone(),
                                r.generated_display(),
                                r.status.as_str().to_string(),
                                r.size_display().to_string(),
                            ]
                        })
                        .collect(),
                },
            },
            actions: vec![
                self.tr(TextKey::DownloadReport),
                self.tr(TextKey::EmailReport),
                self.tr(TextKey::ScheduleReport),
                self.tr(TextKey::RefreshData),
            ],
        }
    }

    // ------------------------------------------------------------------------
    // Admin
    // ------------------------------------------------------------------------

    fn admin(&self) -> AdminView {
        let selected = self
            .widget(keys::ADMIN_TAB)
            .and_then(|c| AdminTab::from_code(&c))
            .unwrap_or_default();
        let tab = match selected {
            AdminTab::Users => AdminTabView::Users(self.users_tab()),
            AdminTab::Settings => AdminTabView::Settings(Box::new(self.settings_tab())),
            AdminTab::Security => AdminTabView::Security(self.security_tab()),
            AdminTab::Backup => AdminTabView::Backup(self.backup_tab()),
        };
        AdminView {
            title: self.tr(TextKey::AdminTitle),
            selected_tab: selected.code().to_string(),
            tabs: AdminTab::all()
                .iter()
                .map(|t| TabView {
                    value: t.code().to_string(),
                    label: self.tr(t.label_key()),
                })
                .collect(),
            tab,
        }
    }

    fn users_tab(&self) -> UsersTabView {
        let filter = &self.state.user_filter;
        let users = filter_users(&self.state.users, filter);
        let roles: Vec<&str> = Role::all().iter().map(|r| r.as_str()).collect();
        let statuses: Vec<&str> = UserStatus::all().iter().map(|s| s.as_str()).collect();
        let mut columns = self.columns(&[
            TextKey::ColFullName,
            TextKey::ColEmail,
            TextKey::Role,
            TextKey::ColDepartment,
            TextKey::ColLastLogin,
        ]);
        columns.push(ColumnView::badge(self.tr(TextKey::ColStatus)));
        UsersTabView {
            title: self.tr(TextKey::TabUsers),
            role: self.filter_select(
                TextKey::Role,
                filter.role.code_with(|r| r.as_str().to_string()),
                &roles,
            ),
            department: self.filter_select(
                TextKey::Department,
                filter.department.code_with(|d| d.clone()),
                &DEPARTMENTS,
            ),
            status: self.filter_select(
                TextKey::Status,
                filter.status.code_with(|s| s.as_str().to_string()),
                &statuses,
            ),
            table: TableView {
                columns,
                rows: users
                    .iter()
                    .map(|u| {
                        vec![
                            u.name.clone(),
                            u.email.clone(),
                            u.role.as_str().to_string(),
                            u.department.clone(),
                            u.last_login_display(),
                            u.status.as_str().to_string(),
                        ]
                    })
                    .collect(),
            },
            actions: vec![self.tr(TextKey::AddNewUser), self.tr(TextKey::ExportUsers)],
        }
    }

    fn settings_tab(&self) -> SettingsTabView {
        SettingsTabView {
            title: self.tr(TextKey::TabSettings),
            general_title: self.tr(TextKey::GeneralSettings),
            email_title: self.tr(TextKey::EmailSettings),
            security_title: self.tr(TextKey::SecuritySettings),
            data_title: self.tr(TextKey::DataSettings),
            labels: SettingsLabels {
                company_name: self.tr(TextKey::CompanyName),
                system_name: self.tr(TextKey::SystemName),
                time_zone: self.tr(TextKey::TimeZone),
                default_language: self.tr(TextKey::DefaultLanguage),
                smtp_server: self.tr(TextKey::SmtpServer),
                smtp_port: self.tr(TextKey::SmtpPort),
                email_from: self.tr(TextKey::FromEmail),
                session_timeout: self.tr(TextKey::SessionTimeout),
                password_policy: self.tr(TextKey::PasswordPolicy),
                two_factor: self.tr(TextKey::TwoFactor),
                max_login_attempts: self.tr(TextKey::MaxLoginAttempts),
                backup_frequency: self.tr(TextKey::BackupFrequency),
                retention_days: self.tr(TextKey::RetentionDays),
                auto_archive: self.tr(TextKey::AutoArchive),
            },
            settings: self.state.settings.clone(),
            time_zones: strings(&TIME_ZONES),
            languages: strings(&DEFAULT_LANGUAGES),
            password_policies: strings(&PASSWORD_POLICIES),
            backup_frequencies: strings(&BACKUP_FREQUENCIES),
            save_label: self.tr(TextKey::SaveSettings),
        }
    }

    fn security_tab(&self) -> SecurityTabView {
        let mut columns = self.columns(&[
            TextKey::ColTimestamp,
            TextKey::ColEvent,
            TextKey::ColUser,
            TextKey::ColIp,
        ]);
        columns.push(ColumnView::badge(self.tr(TextKey::ColRisk)));
        SecurityTabView {
            title: self.tr(TextKey::TabSecurity),
            metrics: self.metrics(&self.reference.security_metrics),
            log: TitledTable {
                title: self.tr(TextKey::SecurityAuditLog),
                table: TableView {
                    columns,
                    rows: self
                        .reference
                        .audit_log
                        .iter()
                        .map(|a| {
                            vec![
                                a.timestamp.clone(),
                                a.event.clone(),
                                a.user.clone(),
                                a.ip.clone(),
                                a.risk.clone(),
                            ]
                        })
                        .collect(),
                },
            },
            scan_label: self.tr(TextKey::RunSecurityScan),
        }
    }

    fn backup_tab(&self) -> BackupTabView {
        let catalog = &self.reference.backup;
        let pick = |key: &str, options: &[String]| {
            self.widget(key)
                .filter(|v| options.contains(v))
                .or_else(|| options.first().cloned())
                .unwrap_or_default()
        };
        BackupTabView {
            title: self.tr(TextKey::BackupManagement),
            last_backup: format!("{}: {}", self.tr(TextKey::LastBackup), catalog.last_backup),
            schedule: SelectView {
                label: self.tr(TextKey::BackupSchedule),
                value: pick(keys::BACKUP_SCHEDULE, &catalog.schedules),
                options: catalog.schedules.iter().map(|s| OptionView::plain(s.as_str())).collect(),
            },
            run_label: self.tr(TextKey::RunBackupNow),
            running: self.state.backup_running,
            running_text: self.tr(TextKey::BackupStarted),
            restore_title: self.tr(TextKey::RestoreOptions),
            file: SelectView {
                label: self.tr(TextKey::SelectBackup),
                value: pick(keys::BACKUP_FILE, &catalog.files),
                options: catalog.files.iter().map(|s| OptionView::plain(s.as_str())).collect(),
            },
            components_label: self.tr(TextKey::RestoreComponents),
            components: catalog.restore_components.clone(),
            restore_label: self.tr(TextKey::RestoreFromBackup),
        }
    }

    // ------------------------------------------------------------------------
    // Training
    // ------------------------------------------------------------------------

    fn training(&self) -> TrainingView {
        let selected = self
            .widget(keys::TRAINING_TAB)
            .and_then(|c| TrainingTab::from_code(&c))
            .unwrap_or_default();
        let tab = match selected {
            TrainingTab::Guide => TrainingTabView::Guide(self.guide_tab()),
            TrainingTab::Modules => TrainingTabView::Modules(self.modules_tab()),
            TrainingTab::QuickReference => TrainingTabView::QuickReference(
                self.reference
                    .quick_reference
                    .iter()
                    .map(|t| TitledTable {
                        title: t.title.clone(),
                        table: TableView {
                            columns: t.columns.iter().map(|c| ColumnView::text(c.clone())).collect(),
                            rows: t.rows.clone(),
                        },
                    })
                    .collect(),
            ),
            TrainingTab::Faq => TrainingTabView::Faq(self.faq_tab()),
            TrainingTab::Support => TrainingTabView::Support(self.support_tab()),
        };
        TrainingView {
            title: self.tr(TextKey::TrainingTitle),
            selected_tab: selected.code().to_string(),
            tabs: TrainingTab::all()
                .iter()
                .map(|t| TabView {
                    value: t.code().to_string(),
                    label: self.tr(t.label_key()),
                })
                .collect(),
            tab,
        }
    }

    fn guide_tab(&self) -> GuideTabView {
        let sections = &self.reference.guide;
        let wanted = self.widget(keys::GUIDE_SECTION).unwrap_or_default();
        let section = find_section(sections, &wanted);
        GuideTabView {
            section: SelectView {
                label: self.tr(TextKey::GuideSection),
                value: section.map(|s| s.title.clone()).unwrap_or_default(),
                options: sections.iter().map(|s| OptionView::plain(s.title.as_str())).collect(),
            },
            heading: section.map(|s| s.title.clone()).unwrap_or_default(),
            paragraphs: section.map(|s| s.paragraphs.clone()).unwrap_or_default(),
        }
    }

    fn modules_tab(&self) -> ModulesTabView {
        let modules = &self.reference.modules;
        let mut columns = self.columns(&[TextKey::ColModule, TextKey::ColDuration]);
        columns.push(ColumnView::badge(self.tr(TextKey::ColStatus)));
        columns.push(ColumnView::text(self.tr(TextKey::ColScore)));
        ModulesTabView {
            progress_title: self.tr(TextKey::TrainingProgress),
            metrics: self.metrics(&self.reference.training_metrics),
            progress: completion_ratio(modules),
            modules: TitledTable {
                title: self.tr(TextKey::AvailableModules),
                table: TableView {
                    columns,
                    rows: modules
                        .iter()
                        .map(|m| vec![m.name.clone(), m.duration.clone(), m.status.clone(), m.score.clone()])
                        .collect(),
                },
            },
        }
    }

    fn faq_tab(&self) -> FaqTabView {
        let faq = &self.reference.faq;
        let category = self
            .widget(keys::FAQ_CATEGORY)
            .filter(|c| FAQ_CATEGORIES.contains(&c.as_str()))
            .unwrap_or_else(|| FAQ_CATEGORIES[0].to_string());
        let query = self.widget(keys::FAQ_SEARCH).unwrap_or_default();
        let to_view = |entries: Vec<FaqEntry>| -> Vec<FaqEntryView> {
            entries
                .into_iter()
                .map(|e| FaqEntryView {
                    question: e.question,
                    answer: e.answer,
                })
                .collect()
        };
        let searching = !query.is_empty();
        let search_results = if searching {
            to_view(search_faq(faq, &query))
        } else {
            Vec::new()
        };
        let no_matches = (searching && search_results.is_empty()).then(|| self.tr(TextKey::NoFaqMatches));
        FaqTabView {
            category: SelectView {
                label: self.tr(TextKey::FaqCategory),
                value: category.clone(),
                options: plain_options(&FAQ_CATEGORIES),
            },
            entries: to_view(faq_for_category(faq, &category)),
            search: InputView {
                label: self.tr(TextKey::SearchFaq),
                value: query,
                placeholder: String::new(),
            },
            search_results,
            no_matches,
        }
    }

    fn support_tab(&self) -> SupportTabView {
        let app = &self.state.app;
        let mut columns = self.columns(&[TextKey::ColTicketId, TextKey::ColSubject]);
        columns.push(ColumnView::badge(self.tr(TextKey::ColStatus)));
        columns.push(ColumnView::text(self.tr(TextKey::ColCreated)));
        columns.push(ColumnView::text(self.tr(TextKey::ColPriority)));
        SupportTabView {
            form_title: self.tr(TextKey::SubmitTicket),
            issue_type: SelectView {
                label: self.tr(TextKey::IssueType),
                value: ISSUE_TYPES[0].to_string(),
                options: plain_options(&ISSUE_TYPES),
            },
            priority: SelectView {
                label: self.tr(TextKey::Priority),
                value: TICKET_PRIORITIES[0].to_string(),
                options: plain_options(&TICKET_PRIORITIES),
            },
            subject_label: self.tr(TextKey::Subject),
            description_label: self.tr(TextKey::Description),
            submit_label: self.tr(TextKey::SubmitTicket),
            contact_title: self.tr(TextKey::ContactInformation),
            contact: vec![
                ContactLine {
                    label: self.tr(TextKey::EmailSupport),
                    value: app.support_email.clone(),
                },
                ContactLine {
                    label: self.tr(TextKey::PhoneSupport),
                    value: app.support_phone.clone(),
                },
                ContactLine {
                    label: self.tr(TextKey::KnowledgeBase),
                    value: app.support_url.clone(),
                },
            ],
            stats_title: self.tr(TextKey::SupportStatistics),
            stats: self.metrics(&self.reference.support_stats),
            tickets: TitledTable {
                title: self.tr(TextKey::RecentTickets),
                table: TableView {
                    columns,
                    rows: self
                        .state
                        .tickets
                        .iter()
                        .map(|t| {
                            vec![
                                t.id.clone(),
                                t.subject.clone(),
                                t.status.as_str().to_string(),
                                t.created.format("%Y-%m-%d").to_string(),
                                t.priority.clone(),
                            ]
                        })
                        .collect(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_record::form::{RecordForm, SubmitAction};
    use crate::shared::config::load_config;
    use crate::shared::list_utils::Choice;
    use crate::shared::sample_data::reference_data;
    use crate::shared::session::Action;
    use crate::system::auth::{CredentialTable, LoginRequest};
    use crate::domain::a001_record::filter::RecordFilter;
    use chrono::NaiveDate;
    use serde_json::Value;

    fn session() -> (SessionState, CredentialTable) {
        let config = load_config().unwrap();
        (SessionState::start(&config), config.credential_table())
    }

    fn logged_in() -> (SessionState, CredentialTable) {
        let (mut state, creds) = session();
        state
            .apply(Action::Login(LoginRequest::new("demo", "demo")), &creds)
            .unwrap();
        (state, creds)
    }

    fn app_view(state: &SessionState) -> AppView {
        match render(state, reference_data()).body {
            ViewBody::App(app) => *app,
            ViewBody::Login(_) => panic!("expected the app view"),
        }
    }

    fn records_view(state: &SessionState) -> RecordsView {
        match app_view(state).page {
            PageView::Records(view) => view,
            other => panic!("expected records page, got {:?}", other),
        }
    }

    #[test]
    fn test_logged_out_renders_login_only() {
        let (state, _) = session();
        let tree = render(&state, reference_data());
        match tree.body {
            ViewBody::Login(login) => {
                assert_eq!(login.submit_label, "Login");
                assert_eq!(login.notice, None);
            }
            ViewBody::App(_) => panic!("logged-out session must not render the app"),
        }
    }

    #[test]
    fn test_failed_login_notice_on_login_view() {
        let (mut state, creds) = session();
        let _ = state.apply(Action::Login(LoginRequest::new("demo", "wrong")), &creds);
        match render(&state, reference_data()).body {
            ViewBody::Login(login) => {
                let notice = login.notice.unwrap();
                assert_eq!(notice.kind, NoticeKind::Error);
                assert_eq!(notice.text, "Invalid username or password");
            }
            ViewBody::App(_) => panic!("still logged out"),
        }
    }

    #[test]
    fn test_logged_in_chrome() {
        let (state, _) = logged_in();
        let app = app_view(&state);
        let active: Vec<Page> = app.nav.iter().filter(|n| n.active).map(|n| n.page).collect();
        assert_eq!(active, vec![Page::Dashboard]);
        assert_eq!(app.user_card.name, "John Smith");
        assert_eq!(app.user_card.role, "Administrator");
        assert!(app.footer[0].contains("2.1.0"));
        assert!(matches!(app.page, PageView::Dashboard(_)));
    }

    #[test]
    fn test_language_switch_changes_labels_not_data() {
        let (mut state, creds) = logged_in();
        state.apply(Action::Navigate(Page::Records), &creds).unwrap();
        let en = records_view(&state);
        state.apply(Action::SetLanguage(Language::Es), &creds).unwrap();
        let es = records_view(&state);

        assert_eq!(en.table.rows, es.table.rows);
        assert_eq!(en.table.columns[0].label, "Record ID");
        assert_eq!(es.table.columns[0].label, "ID de Registro");
        assert_ne!(en.title, es.title);
        let es_app = app_view(&state);
        assert_eq!(es_app.nav[0].label, "Panel");
    }

    #[test]
    fn test_records_page_reflects_filter_and_sort() {
        let (mut state, creds) = logged_in();
        state.apply(Action::Navigate(Page::Records), &creds).unwrap();
        let filter = RecordFilter::new(Choice::Only(Category::Legal), Choice::All, "");
        state.apply(Action::SetRecordFilter(filter), &creds).unwrap();
        let view = records_view(&state);
        assert_eq!(view.table.rows.len(), 1);
        assert_eq!(view.table.rows[0][0], "IMS-001");
        assert_eq!(view.category.value, "Legal");
        assert_eq!(view.status.value, "All");
        assert_eq!(view.match_count, "1 records found");

        state.apply(Action::SetRecordFilter(RecordFilter::default()), &creds).unwrap();
        state.apply(Action::SortRecords(RecordField::Created), &creds).unwrap();
        let view = records_view(&state);
        assert_eq!(view.table.rows[0][0], "IMS-004");
        assert_eq!(view.table.columns[5].sort_indicator, " ▲");
        assert_eq!(view.table.columns[0].sort_indicator, "");
    }

    #[test]
    fn test_records_page_empty_result() {
        let (mut state, creds) = logged_in();
        state.apply(Action::Navigate(Page::Records), &creds).unwrap();
        let filter = RecordFilter::new(Choice::Only(Category::Security), Choice::Only(RecordStatus::Active), "");
        state.apply(Action::SetRecordFilter(filter), &creds).unwrap();
        let view = records_view(&state);
        assert!(view.table.rows.is_empty());
        assert!(view.empty_text.is_some());
        assert_eq!(view.quick_actions, None);
    }

    #[test]
    fn test_add_record_page_shows_next_id_and_errors() {
        let (mut state, creds) = logged_in();
        state.apply(Action::Navigate(Page::AddRecord), &creds).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let _ = state.apply(
            Action::SubmitRecord {
                form: RecordForm::blank(today),
                action: SubmitAction::Save,
            },
            &creds,
        );
        match app_view(&state).page {
            PageView::AddRecord(view) => {
                assert_eq!(view.next_id, "IMS-005");
                let fields: Vec<&str> = view.field_errors.iter().map(|e| e.field.as_str()).collect();
                assert_eq!(fields, vec!["title", "category"]);
                assert_eq!(view.category.options[0].value, "");
            }
            other => panic!("expected add record page, got {:?}", other),
        }
    }

    #[test]
    fn test_admin_tab_follows_widget() {
        let (mut state, creds) = logged_in();
        state.apply(Action::Navigate(Page::Admin), &creds).unwrap();
        state
            .apply(
                Action::SetWidget {
                    key: keys::ADMIN_TAB.into(),
                    value: Value::String("security".into()),
                },
                &creds,
            )
            .unwrap();
        match app_view(&state).page {
            PageView::Admin(view) => {
                assert_eq!(view.selected_tab, "security");
                assert!(matches!(view.tab, AdminTabView::Security(_)));
            }
            other => panic!("expected admin page, got {:?}", other),
        }
    }

    #[test]
    fn test_faq_search_spans_categories() {
        let (mut state, creds) = logged_in();
        state.apply(Action::Navigate(Page::Training), &creds).unwrap();
        for (key, value) in [(keys::TRAINING_TAB, "faq"), (keys::FAQ_SEARCH, "password")] {
            state
                .apply(
                    Action::SetWidget {
                        key: key.into(),
                        value: Value::String(value.into()),
                    },
                    &creds,
                )
                .unwrap();
        }
        match app_view(&state).page {
            PageView::Training(TrainingView {
                tab: TrainingTabView::Faq(faq),
                ..
            }) => {
                assert_eq!(faq.category.value, "General Usage");
                assert_eq!(faq.entries.len(), 3);
                assert_eq!(faq.search_results.len(), 1);
                assert_eq!(faq.no_matches, None);
            }
            other => panic!("expected FAQ tab, got {:?}", other),
        }
    }

    #[test]
    fn test_accessors_follow_body() {
        let (state, creds) = session();
        let tree = render(&state, reference_data());
        assert!(tree.login().is_some());
        assert!(tree.page().is_none());

        let (mut state, _) = logged_in();
        state.apply(Action::Navigate(Page::Reports), &creds).unwrap();
        let tree = render(&state, reference_data());
        let page = tree.page().unwrap();
        assert_eq!(page.page(), Page::Reports);
        assert!(page.as_reports().is_some());
        assert!(page.as_records().is_none());
    }

    #[test]
    fn test_render_is_deterministic() {
        let (state, _) = logged_in();
        assert_eq!(render(&state, reference_data()), render(&state, reference_data()));
    }
}
