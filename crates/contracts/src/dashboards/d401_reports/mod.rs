use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Report kinds offered by the reports page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    UsageAnalytics,
    PerformanceMetrics,
    SecurityAudit,
    DataQuality,
    UserActivity,
    Custom,
}

impl ReportType {
    pub fn all() -> [ReportType; 6] {
        [
            ReportType::UsageAnalytics,
            ReportType::PerformanceMetrics,
            ReportType::SecurityAudit,
            ReportType::DataQuality,
            ReportType::UserActivity,
            ReportType::Custom,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ReportType::UsageAnalytics => "usage-analytics",
            ReportType::PerformanceMetrics => "performance-metrics",
            ReportType::SecurityAudit => "security-audit",
            ReportType::DataQuality => "data-quality",
            ReportType::UserActivity => "user-activity",
            ReportType::Custom => "custom",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportType::UsageAnalytics => "Usage Analytics",
            ReportType::PerformanceMetrics => "Performance Metrics",
            ReportType::SecurityAudit => "Security Audit",
            ReportType::DataQuality => "Data Quality Report",
            ReportType::UserActivity => "User Activity Report",
            ReportType::Custom => "Custom Report",
        }
    }

    /// Value of the history table's "Type" column
    pub fn kind(&self) -> &'static str {
        match self {
            ReportType::UsageAnalytics => "Analytics",
            ReportType::PerformanceMetrics => "Performance",
            ReportType::SecurityAudit => "Security",
            ReportType::DataQuality => "System",
            ReportType::UserActivity => "Users",
            ReportType::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportPeriod {
    Last7Days,
    Last30Days,
    Last90Days,
    ThisYear,
    CustomRange,
}

impl ReportPeriod {
    pub fn all() -> [ReportPeriod; 5] {
        [
            ReportPeriod::Last7Days,
            ReportPeriod::Last30Days,
            ReportPeriod::Last90Days,
            ReportPeriod::ThisYear,
            ReportPeriod::CustomRange,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            ReportPeriod::Last7Days => "7d",
            ReportPeriod::Last30Days => "30d",
            ReportPeriod::Last90Days => "90d",
            ReportPeriod::ThisYear => "year",
            ReportPeriod::CustomRange => "custom",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.code() == code)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportPeriod::Last7Days => "Last 7 days",
            ReportPeriod::Last30Days => "Last 30 days",
            ReportPeriod::Last90Days => "Last 90 days",
            ReportPeriod::ThisYear => "This Year",
            ReportPeriod::CustomRange => "Custom Range",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    Ready,
    Processing,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Ready => "Ready",
            ReportStatus::Processing => "Processing",
        }
    }
}

/// Row of the report history table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub name: String,
    pub kind: String,
    pub generated: NaiveDateTime,
    pub status: ReportStatus,
    /// `None` until the file exists
    pub size: Option<String>,
}

impl ReportEntry {
    /// History row for a report generated at `at`
    pub fn generated(report_type: ReportType, period: ReportPeriod, at: NaiveDateTime) -> Self {
        Self {
            name: format!("{} ({})", report_type.display_name(), period.display_name()),
            kind: report_type.kind().to_string(),
            generated: at,
            status: ReportStatus::Ready,
            size: None,
        }
    }

    pub fn generated_display(&self) -> String {
        self.generated.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn size_display(&self) -> &str {
        match (&self.size, self.status) {
            (Some(size), _) => size,
            (None, ReportStatus::Processing) => "Pending",
            (None, ReportStatus::Ready) => "-",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_generated_entry() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 21)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap();
        let entry = ReportEntry::generated(ReportType::SecurityAudit, ReportPeriod::Last30Days, at);
        assert_eq!(entry.name, "Security Audit (Last 30 days)");
        assert_eq!(entry.kind, "Security");
        assert_eq!(entry.status, ReportStatus::Ready);
        assert_eq!(entry.generated_display(), "2024-01-21 08:05");
        assert_eq!(entry.size_display(), "-");
    }

    #[test]
    fn test_codes() {
        assert_eq!(ReportType::from_code("data-quality"), Some(ReportType::DataQuality));
        assert_eq!(ReportPeriod::from_code("90d"), Some(ReportPeriod::Last90Days));
        assert_eq!(ReportPeriod::from_code("1d"), None);
    }
}
