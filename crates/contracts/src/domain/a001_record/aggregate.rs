use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Record identifier in the `IMS-NNN` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    pub const PREFIX: &'static str = "IMS-";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Build an id from its sequence number, zero-padded to three digits
    pub fn from_sequence(seq: u32) -> Self {
        Self(format!("{}{:03}", Self::PREFIX, seq))
    }

    /// Numeric suffix of an `IMS-NNN` id, if it has one
    pub fn sequence(&self) -> Option<u32> {
        self.0.strip_prefix(Self::PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Record category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Legal,
    Technical,
    Financial,
    Security,
    Operations,
    Project,
    Client,
}

impl Category {
    pub fn all() -> [Category; 7] {
        [
            Category::Legal,
            Category::Technical,
            Category::Financial,
            Category::Security,
            Category::Operations,
            Category::Project,
            Category::Client,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Legal => "Legal",
            Category::Technical => "Technical",
            Category::Financial => "Financial",
            Category::Security => "Security",
            Category::Operations => "Operations",
            Category::Project => "Project",
            Category::Client => "Client",
        }
    }

    /// Label of the category in the record form's picker
    pub fn form_label(&self) -> &'static str {
        match self {
            Category::Legal => "Legal Documents",
            Category::Technical => "Technical Specifications",
            Category::Financial => "Financial Records",
            Category::Security => "Security Documents",
            Category::Operations => "Operations Records",
            Category::Project => "Project Files",
            Category::Client => "Client Communications",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.as_str() == s)
    }
}

/// Record lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordStatus {
    Active,
    Draft,
    Complete,
    Pending,
}

impl RecordStatus {
    pub fn all() -> [RecordStatus; 4] {
        [
            RecordStatus::Active,
            RecordStatus::Draft,
            RecordStatus::Complete,
            RecordStatus::Pending,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "Active",
            RecordStatus::Draft => "Draft",
            RecordStatus::Complete => "Complete",
            RecordStatus::Pending => "Pending",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|st| st.as_str() == s)
    }
}

/// Record priority, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn all() -> [Priority; 4] {
        [Priority::Low, Priority::Medium, Priority::High, Priority::Critical]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.as_str() == s)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Record (document, contract or report metadata row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub category: Category,
    pub created: NaiveDate,
    pub modified: NaiveDate,
    pub status: RecordStatus,
    pub priority: Priority,
    pub assigned: String,
}

/// Next free id for `records`: one past the largest numeric suffix, saturating at `u32::MAX`
pub fn next_record_id(records: &[Record]) -> RecordId {
    let max = records
        .iter()
        .filter_map(|r| r.id.sequence())
        .max()
        .unwrap_or(0);
    RecordId::from_sequence(max.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> Record {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        Record {
            id: RecordId::new(id),
            name: "Sample".into(),
            category: Category::Legal,
            created: date,
            modified: date,
            status: RecordStatus::Active,
            priority: Priority::Low,
            assigned: "John Smith".into(),
        }
    }

    #[test]
    fn test_record_id_sequence() {
        assert_eq!(RecordId::new("IMS-042").sequence(), Some(42));
        assert_eq!(RecordId::new("DOC-1").sequence(), None);
        assert_eq!(RecordId::from_sequence(5).as_str(), "IMS-005");
        assert_eq!(RecordId::from_sequence(1234).as_str(), "IMS-1234");
    }

    #[test]
    fn test_next_record_id_skips_foreign_ids() {
        assert_eq!(next_record_id(&[]).as_str(), "IMS-001");
        let records = vec![record("IMS-002"), record("LEGACY-9"), record("IMS-004")];
        assert_eq!(next_record_id(&records).as_str(), "IMS-005");
    }

    #[test]
    fn test_next_record_id_at_sequence_limit() {
        let records = vec![record(&format!("IMS-{}", u32::MAX))];
        assert_eq!(next_record_id(&records).sequence(), Some(u32::MAX));
    }

    #[test]
    fn test_enum_codes_round_trip_through_str() {
        for c in Category::all() {
            assert_eq!(Category::from_str(c.as_str()), Some(c));
        }
        assert_eq!(RecordStatus::from_str("Pending"), Some(RecordStatus::Pending));
        assert_eq!(Priority::from_str("Urgent"), None);
        assert!(Priority::Critical > Priority::High);
    }
}
