//! Hardcoded sample collections and the static reference data drawn by the pages.

use crate::dashboards::d400_overview::dto::{ActivityRow, ChartKind, ChartSeries, Metric};
use crate::dashboards::d401_reports::{ReportEntry, ReportStatus};
use crate::domain::a001_record::aggregate::{Category, Priority, Record, RecordId, RecordStatus};
use crate::shared::i18n::TextKey;
use crate::system::support::{Ticket, TicketStatus};
use crate::system::training::{
    faq_entries, guide_sections, quick_reference, training_modules, FaqEntry, GuideSection,
    ReferenceTable, TrainingModule,
};
use crate::system::users::{Role, User, UserStatus};
use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn date_time(y: i32, m: u32, d: u32, hh: u32, mm: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(hh, mm, 0).unwrap_or_default()
}

fn record(
    id: &str,
    name: &str,
    category: Category,
    created: NaiveDate,
    modified: NaiveDate,
    status: RecordStatus,
    priority: Priority,
    assigned: &str,
) -> Record {
    Record {
        id: RecordId::new(id),
        name: name.to_string(),
        category,
        created,
        modified,
        status,
        priority,
        assigned: assigned.to_string(),
    }
}

pub fn sample_records() -> Vec<Record> {
    vec![
        record(
            "IMS-001",
            "Client Contract - ABC Corp",
            Category::Legal,
            date(2024, 1, 15),
            date(2024, 1, 20),
            RecordStatus::Active,
            Priority::High,
            "John Smith",
        ),
        record(
            "IMS-002",
            "Project Specifications",
            Category::Technical,
            date(2024, 1, 14),
            date(2024, 1, 19),
            RecordStatus::Draft,
            Priority::Medium,
            "Jane Doe",
        ),
        record(
            "IMS-003",
            "Budget Analysis Q1",
            Category::Financial,
            date(2024, 1, 12),
            date(2024, 1, 18),
            RecordStatus::Complete,
            Priority::High,
            "Bob Wilson",
        ),
        record(
            "IMS-004",
            "Security Audit Report",
            Category::Security,
            date(2024, 1, 10),
            date(2024, 1, 17),
            RecordStatus::Pending,
            Priority::Critical,
            "Alice Johnson",
        ),
    ]
}

fn user(name: &str, role: Role, department: &str, last_login: NaiveDateTime, status: UserStatus) -> User {
    User {
        name: name.to_string(),
        email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
        role,
        department: department.to_string(),
        last_login,
        status,
    }
}

pub fn sample_users() -> Vec<User> {
    vec![
        user("John Smith", Role::Administrator, "IT", date_time(2024, 1, 20, 10, 30), UserStatus::Active),
        user("Jane Doe", Role::Manager, "Operations", date_time(2024, 1, 20, 9, 15), UserStatus::Active),
        user("Bob Wilson", Role::User, "Finance", date_time(2024, 1, 19, 16, 45), UserStatus::Active),
        user("Alice Johnson", Role::User, "Security", date_time(2024, 1, 18, 14, 20), UserStatus::Inactive),
    ]
}

pub fn sample_report_history() -> Vec<ReportEntry> {
    vec![
        ReportEntry {
            name: "Monthly Usage Summary".into(),
            kind: "Analytics".into(),
            generated: date_time(2024, 1, 20, 9, 30),
            status: ReportStatus::Ready,
            size: Some("2.3 MB".into()),
        },
        ReportEntry {
            name: "Security Audit Q1".into(),
            kind: "Security".into(),
            generated: date_time(2024, 1, 19, 14, 15),
            status: ReportStatus::Processing,
            size: None,
        },
        ReportEntry {
            name: "Data Quality Check".into(),
            kind: "System".into(),
            generated: date_time(2024, 1, 18, 11, 45),
            status: ReportStatus::Ready,
            size: Some("1.8 MB".into()),
        },
    ]
}

pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "IMS-2024-001".into(),
            subject: "Cannot upload large files".into(),
            issue_type: "Technical Problem".into(),
            status: TicketStatus::InProgress,
            created: date(2024, 1, 20),
            priority: "Medium".into(),
        },
        Ticket {
            id: "IMS-2024-002".into(),
            subject: "Password reset not working".into(),
            issue_type: "Account Access".into(),
            status: TicketStatus::Resolved,
            created: date(2024, 1, 18),
            priority: "High".into(),
        },
    ]
}

// ============================================================================
// Reference data
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: String,
    pub event: String,
    pub user: String,
    pub ip: String,
    pub risk: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupCatalog {
    pub last_backup: String,
    pub schedules: Vec<String>,
    pub files: Vec<String>,
    pub restore_components: Vec<String>,
}

/// Everything static that the pages draw besides the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub quick_stats: Vec<Metric>,
    pub dashboard_metrics: Vec<Metric>,
    pub category_chart: ChartSeries,
    pub timeline_chart: ChartSeries,
    pub recent_activity: Vec<ActivityRow>,
    pub report_stats: Vec<Metric>,
    pub monthly_activity: ChartSeries,
    pub user_activity: ChartSeries,
    pub security_metrics: Vec<Metric>,
    pub audit_log: Vec<AuditEntry>,
    pub backup: BackupCatalog,
    pub training_metrics: Vec<Metric>,
    pub modules: Vec<TrainingModule>,
    pub guide: Vec<GuideSection>,
    pub quick_reference: Vec<ReferenceTable>,
    pub faq: Vec<FaqEntry>,
    pub support_stats: Vec<Metric>,
    /// Names offered by the restricted-visibility picker
    pub assignable_users: Vec<String>,
}

fn activity(action: &str, user: &str, time: &str, status: &str) -> ActivityRow {
    ActivityRow {
        action: action.into(),
        user: user.into(),
        time: time.into(),
        status: status.into(),
    }
}

fn audit(timestamp: &str, event: &str, user: &str, ip: &str, risk: &str) -> AuditEntry {
    AuditEntry {
        timestamp: timestamp.into(),
        event: event.into(),
        user: user.into(),
        ip: ip.into(),
        risk: risk.into(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ReferenceData {
    pub fn build() -> Self {
        Self {
            quick_stats: vec![
                Metric::new(TextKey::ActiveRecords, "1,247", "23"),
                Metric::new(TextKey::PendingTasks, "23", "-5"),
                Metric::new(TextKey::SystemHealth, "98.2%", "0.5%"),
            ],
            dashboard_metrics: vec![
                Metric::new(TextKey::TotalRecords, "1,247", "23 this week"),
                Metric::new(TextKey::PendingTasks, "23", "-5 from yesterday"),
                Metric::new(TextKey::ThisMonth, "156", "12% increase"),
                Metric::new(TextKey::SystemHealth, "98.2%", "0.5% improvement"),
            ],
            category_chart: ChartSeries::new(
                TextKey::RecordsByCategory,
                ChartKind::Pie,
                &[
                    ("Legal", 245),
                    ("Technical", 389),
                    ("Financial", 156),
                    ("Security", 89),
                    ("Operations", 368),
                ],
            ),
            timeline_chart: ChartSeries::new(
                TextKey::ActivityTimeline,
                ChartKind::Line,
                &[
                    ("01-01", 23),
                    ("01-02", 31),
                    ("01-03", 18),
                    ("01-04", 42),
                    ("01-05", 37),
                    ("01-06", 29),
                    ("01-07", 45),
                    ("01-08", 12),
                    ("01-09", 33),
                    ("01-10", 26),
                    ("01-11", 48),
                    ("01-12", 19),
                    ("01-13", 39),
                    ("01-14", 27),
                    ("01-15", 35),
                    ("01-16", 41),
                    ("01-17", 22),
                    ("01-18", 30),
                    ("01-19", 46),
                    ("01-20", 28),
                ],
            ),
            recent_activity: vec![
                activity("Record Updated", "Jane Doe", "2 min ago", "Complete"),
                activity("New Record Added", "Bob Wilson", "15 min ago", "Pending"),
                activity("Report Generated", "System", "1 hour ago", "Complete"),
                activity("User Login", "Alice Johnson", "2 hours ago", "Complete"),
                activity("Security Scan", "System", "3 hours ago", "Complete"),
            ],
            report_stats: vec![
                Metric::new(TextKey::TotalRecords, "1,247", "12%"),
                Metric::new(TextKey::ActiveUsers, "45", "8%"),
                Metric::new(TextKey::StorageUsed, "2.3 TB", "5%"),
                Metric::new(TextKey::SystemUptime, "99.8%", "0.2%"),
            ],
            monthly_activity: ChartSeries::new(
                TextKey::MonthlyActivity,
                ChartKind::Bar,
                &[
                    ("Jan", 234),
                    ("Feb", 289),
                    ("Mar", 345),
                    ("Apr", 423),
                    ("May", 567),
                    ("Jun", 612),
                ],
            ),
            user_activity: ChartSeries::new(
                TextKey::UserActivity,
                ChartKind::Pie,
                &[
                    ("John S.", 156),
                    ("Jane D.", 134),
                    ("Bob W.", 98),
                    ("Alice J.", 87),
                    ("Mike D.", 65),
                ],
            ),
            security_metrics: vec![
                Metric::new(TextKey::SecurityScore, "92%", "2%"),
                Metric::new(TextKey::FailedLogins, "12", "5"),
                Metric::new(TextKey::ActiveSessions, "23", "3"),
                Metric::new(TextKey::LastScan, "2 hrs ago", ""),
            ],
            audit_log: vec![
                audit("2024-01-20 10:30", "Login Success", "john.smith", "192.168.1.100", "Low"),
                audit("2024-01-20 10:25", "Failed Login", "unknown", "203.45.67.89", "Medium"),
                audit("2024-01-20 10:20", "Password Change", "jane.doe", "192.168.1.105", "Low"),
                audit("2024-01-20 09:45", "File Access", "bob.wilson", "192.168.1.110", "Low"),
                audit("2024-01-20 09:30", "Admin Access", "john.smith", "192.168.1.100", "Medium"),
            ],
            backup: BackupCatalog {
                last_backup: "2024-01-20 02:00 AM (Success)".into(),
                schedules: strings(&["Daily at 2:00 AM", "Weekly on Sunday", "Monthly on 1st", "Manual Only"]),
                files: strings(&["2024-01-20_02-00.bak", "2024-01-19_02-00.bak", "2024-01-18_02-00.bak"]),
                restore_components: strings(&["Database", "User Files", "System Settings", "User Accounts"]),
            },
            training_metrics: vec![
                Metric::new(TextKey::CompletedModules, "3/8", "37.5%"),
                Metric::new(TextKey::TimeSpent, "2.5 hours", "+30 min"),
                Metric::new(TextKey::CertificationProgress, "60%", "+15%"),
            ],
            modules: training_modules(),
            guide: guide_sections(),
            quick_reference: quick_reference(),
            faq: faq_entries(),
            support_stats: vec![
                Metric::new(TextKey::AvgResponseTime, "2.3 hours", ""),
                Metric::new(TextKey::ResolutionRate, "94%", ""),
                Metric::new(TextKey::SatisfactionScore, "4.6/5", ""),
                Metric::new(TextKey::OpenTickets, "12", ""),
            ],
            assignable_users: strings(&["John Smith", "Jane Doe", "Bob Wilson", "Alice Johnson", "Mike Davis"]),
        }
    }
}

static REFERENCE: Lazy<ReferenceData> = Lazy::new(ReferenceData::build);

pub fn reference_data() -> &'static ReferenceData {
    &REFERENCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_record_ids_unique() {
        let records = sample_records();
        let ids: HashSet<_> = records.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), records.len());
        assert!(records.iter().all(|r| r.modified >= r.created));
    }

    #[test]
    fn test_sample_user_emails() {
        let users = sample_users();
        assert_eq!(users[3].email, "alice.johnson@company.com");
        assert_eq!(users[3].status, UserStatus::Inactive);
    }

    #[test]
    fn test_reference_data_charts() {
        let data = reference_data();
        assert_eq!(data.category_chart.total(), 1247);
        assert_eq!(data.monthly_activity.max_value(), 612);
        assert_eq!(data.timeline_chart.points.len(), 20);
        assert_eq!(data.modules.len(), 8);
    }
}
