use super::aggregate::{next_record_id, Category, Priority, Record, RecordStatus};
use crate::shared::i18n::TextKey;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Form choices
// ============================================================================

/// Who may see the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Visibility {
    #[default]
    Public,
    Restricted { users: Vec<String> },
    Private,
}

impl Visibility {
    pub fn code(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Restricted { .. } => "restricted",
            Visibility::Private => "private",
        }
    }
}

/// Initial status offered by the form; "Pending Review" stores as `Pending`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InitialStatus {
    #[default]
    Draft,
    Active,
    PendingReview,
}

impl InitialStatus {
    pub fn all() -> [InitialStatus; 3] {
        [InitialStatus::Draft, InitialStatus::Active, InitialStatus::PendingReview]
    }

    pub fn code(&self) -> &'static str {
        match self {
            InitialStatus::Draft => "draft",
            InitialStatus::Active => "active",
            InitialStatus::PendingReview => "pending-review",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn label_key(&self) -> TextKey {
        match self {
            InitialStatus::Draft => TextKey::StatusDraft,
            InitialStatus::Active => TextKey::StatusActive,
            InitialStatus::PendingReview => TextKey::StatusPendingReview,
        }
    }

    pub fn record_status(&self) -> RecordStatus {
        match self {
            InitialStatus::Draft => RecordStatus::Draft,
            InitialStatus::Active => RecordStatus::Active,
            InitialStatus::PendingReview => RecordStatus::Pending,
        }
    }
}

/// Departments offered by the form and the admin users filter
pub const DEPARTMENTS: [&str; 5] = ["IT", "Finance", "Operations", "Legal", "HR"];

/// How the form was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitAction {
    Save,
    SaveAndContinue,
    SaveAsDraft,
    Cancel,
}

// ============================================================================
// Form DTO
// ============================================================================

/// Add-record form as submitted by the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordForm {
    pub title: String,
    /// `None` while the "Select Category" placeholder is chosen
    pub category: Option<Category>,
    pub priority: Priority,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub tags: String,
    pub visibility: Visibility,
    pub status: InitialStatus,
    pub department: String,
}

impl RecordForm {
    /// Blank form whose dates span `today` .. `today + 30 days`
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            category: None,
            priority: Priority::Low,
            description: String::new(),
            start_date: today,
            end_date: today + Duration::days(30),
            tags: String::new(),
            visibility: Visibility::Public,
            status: InitialStatus::Draft,
            department: DEPARTMENTS[0].to_string(),
        }
    }

    /// Comma-separated tags, trimmed, empties dropped
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// All failing required fields
    pub fn validate(&self) -> Result<(), RecordFormError> {
        let mut errors = Vec::new();
        if self.title.is_empty() {
            errors.push(FieldError::TitleRequired);
        }
        if self.category.is_none() {
            errors.push(FieldError::CategoryRequired);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(RecordFormError { errors })
        }
    }

    /// Validate and build the record that a submission would append to `existing`
    pub fn build_record(
        &self,
        action: SubmitAction,
        assigned: &str,
        existing: &[Record],
    ) -> Result<Record, RecordFormError> {
        self.validate()?;
        let category = self.category.ok_or(RecordFormError {
            errors: vec![FieldError::CategoryRequired],
        })?;
        let status = if action == SubmitAction::SaveAsDraft {
            RecordStatus::Draft
        } else {
            self.status.record_status()
        };
        Ok(Record {
            id: next_record_id(existing),
            name: self.title.clone(),
            category,
            created: self.start_date,
            modified: self.start_date,
            status,
            priority: self.priority,
            assigned: assigned.to_string(),
        })
    }
}

// ============================================================================
// Errors
// ============================================================================

/// A required form field left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum FieldError {
    #[error("record title is required")]
    TitleRequired,
    #[error("a category must be selected")]
    CategoryRequired,
}

impl FieldError {
    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::TitleRequired => "title",
            FieldError::CategoryRequired => "category",
        }
    }

    pub fn message_key(&self) -> TextKey {
        match self {
            FieldError::TitleRequired => TextKey::TitleRequired,
            FieldError::CategoryRequired => TextKey::CategoryRequired,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("please fill in all required fields ({} missing)", .errors.len())]
pub struct RecordFormError {
    pub errors: Vec<FieldError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sample_data::sample_records;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    fn filled() -> RecordForm {
        RecordForm {
            title: "  Vendor NDA  ".into(),
            category: Some(Category::Legal),
            priority: Priority::High,
            tags: "contract, , client ,Q1-2024".into(),
            status: InitialStatus::PendingReview,
            ..RecordForm::blank(today())
        }
    }

    #[test]
    fn test_blank_form_dates() {
        let form = RecordForm::blank(today());
        assert_eq!(form.start_date, today());
        assert_eq!(form.end_date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn test_validate_reports_every_missing_field() {
        let err = RecordForm::blank(today()).validate().unwrap_err();
        assert_eq!(err.errors, vec![FieldError::TitleRequired, FieldError::CategoryRequired]);
        assert_eq!(err.errors[1].field(), "category");

        let form = RecordForm { title: String::new(), ..filled() };
        assert_eq!(form.validate().unwrap_err().errors, vec![FieldError::TitleRequired]);
    }

    #[test]
    fn test_build_record_uses_start_date_and_next_id() {
        let existing = sample_records();
        let record = filled().build_record(SubmitAction::Save, "John Smith", &existing).unwrap();
        assert_eq!(record.id.as_str(), "IMS-005");
        assert_eq!(record.name, "  Vendor NDA  ");
        assert_eq!(record.created, today());
        assert_eq!(record.modified, record.created);
        assert_eq!(record.status, RecordStatus::Pending);
        assert_eq!(record.assigned, "John Smith");
    }

    #[test]
    fn test_save_as_draft_forces_draft() {
        let form = RecordForm { status: InitialStatus::Active, ..filled() };
        let record = form.build_record(SubmitAction::SaveAsDraft, "Jane Doe", &[]).unwrap();
        assert_eq!(record.status, RecordStatus::Draft);
        assert_eq!(record.id.as_str(), "IMS-001");
    }

    #[test]
    fn test_whitespace_title_is_accepted() {
        let existing = sample_records();
        let form = RecordForm {
            title: " ".into(),
            category: Some(Category::Legal),
            ..RecordForm::blank(today())
        };
        assert!(form.validate().is_ok());
        let record = form.build_record(SubmitAction::Save, "John Smith", &existing).unwrap();
        assert_eq!(record.name, " ");
        assert_eq!(record.id.as_str(), "IMS-005");
    }

    #[test]
    fn test_tag_list() {
        assert_eq!(filled().tag_list(), vec!["contract", "client", "Q1-2024"]);
    }
}
