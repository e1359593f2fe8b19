//! Records page filter: category and status choices plus name search.

use super::aggregate::{Category, Record, RecordStatus};
use crate::shared::i18n::TextKey;
use crate::shared::list_utils::{sort_list, Choice, Searchable, SortState, Sortable};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordFilter {
    pub category: Choice<Category>,
    pub status: Choice<RecordStatus>,
    pub search: String,
}

impl RecordFilter {
    pub fn new(category: Choice<Category>, status: Choice<RecordStatus>, search: impl Into<String>) -> Self {
        Self {
            category,
            status,
            search: search.into(),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        if !self.category.admits(&record.category) || !self.status.admits(&record.status) {
            return false;
        }
        // Only the empty string skips the search; whitespace is matched literally
        if self.search.is_empty() {
            return true;
        }
        record.matches_query(&self.search.to_lowercase())
    }
}

impl Searchable for Record {
    fn matches_query(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
    }
}

/// Ordered subsequence of `records` admitted by `filter`
pub fn filter_records(records: &[Record], filter: &RecordFilter) -> Vec<Record> {
    records.iter().filter(|r| filter.matches(r)).cloned().collect()
}

/// Sortable columns of the records table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordField {
    Id,
    Name,
    Category,
    Status,
    Priority,
    Created,
    Modified,
    Assigned,
}

impl RecordField {
    pub fn all() -> [RecordField; 8] {
        [
            RecordField::Id,
            RecordField::Name,
            RecordField::Category,
            RecordField::Status,
            RecordField::Priority,
            RecordField::Created,
            RecordField::Modified,
            RecordField::Assigned,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            RecordField::Id => "id",
            RecordField::Name => "name",
            RecordField::Category => "category",
            RecordField::Status => "status",
            RecordField::Priority => "priority",
            RecordField::Created => "created",
            RecordField::Modified => "modified",
            RecordField::Assigned => "assigned",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|f| f.code() == code)
    }

    /// Column header of the records table
    pub fn header_key(&self) -> TextKey {
        match self {
            RecordField::Id => TextKey::ColRecordId,
            RecordField::Name => TextKey::ColRecordName,
            RecordField::Category => TextKey::ColCategory,
            RecordField::Status => TextKey::ColStatus,
            RecordField::Priority => TextKey::ColPriority,
            RecordField::Created => TextKey::ColCreated,
            RecordField::Modified => TextKey::ColModified,
            RecordField::Assigned => TextKey::ColAssigned,
        }
    }

    /// Cell text of `record` in this column
    pub fn cell(&self, record: &Record) -> String {
        match self {
            RecordField::Id => record.id.to_string(),
            RecordField::Name => record.name.clone(),
            RecordField::Category => record.category.as_str().to_string(),
            RecordField::Status => record.status.as_str().to_string(),
            RecordField::Priority => record.priority.as_str().to_string(),
            RecordField::Created => record.created.format("%Y-%m-%d").to_string(),
            RecordField::Modified => record.modified.format("%Y-%m-%d").to_string(),
            RecordField::Assigned => record.assigned.clone(),
        }
    }
}

impl Sortable for Record {
    type Field = RecordField;

    fn compare_by_field(&self, other: &Self, field: RecordField) -> Ordering {
        match field {
            RecordField::Id => self.id.cmp(&other.id),
            RecordField::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            RecordField::Category => self.category.as_str().cmp(other.category.as_str()),
            RecordField::Status => self.status.as_str().cmp(other.status.as_str()),
            RecordField::Priority => self.priority.cmp(&other.priority),
            RecordField::Created => self.created.cmp(&other.created),
            RecordField::Modified => self.modified.cmp(&other.modified),
            RecordField::Assigned => self.assigned.to_lowercase().cmp(&other.assigned.to_lowercase()),
        }
    }
}

/// Filter then sort; without a sort the collection order is kept
pub fn query_records(
    records: &[Record],
    filter: &RecordFilter,
    sort: Option<SortState<RecordField>>,
) -> Vec<Record> {
    let mut rows = filter_records(records, filter);
    if let Some(s) = sort {
        sort_list(&mut rows, s.field, s.ascending);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_record::aggregate::{Priority, RecordId};
    use crate::shared::sample_data::sample_records;
    use chrono::NaiveDate;

    fn record(id: &str, name: &str, category: Category, status: RecordStatus) -> Record {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        Record {
            id: RecordId::new(id),
            name: name.into(),
            category,
            created: date,
            modified: date,
            status,
            priority: Priority::Medium,
            assigned: "Jane Doe".into(),
        }
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_example_scenario_category_only() {
        let records = vec![
            record("IMS-001", "Contract Agreement", Category::Legal, RecordStatus::Active),
            record("IMS-002", "Project Specifications", Category::Technical, RecordStatus::Draft),
        ];
        let filter = RecordFilter::new(Choice::Only(Category::Legal), Choice::All, "");
        let result = filter_records(&records, &filter);
        assert_eq!(result, vec![records[0].clone()]);
    }

    #[test]
    fn test_all_sentinel_is_identity() {
        let records = sample_records();
        for category in Category::all() {
            for status in RecordStatus::all() {
                let once = filter_records(
                    &records,
                    &RecordFilter::new(Choice::Only(category), Choice::Only(status), ""),
                );
                let again = filter_records(&once, &RecordFilter::default());
                assert_eq!(once, again);
            }
        }
        assert_eq!(filter_records(&records, &RecordFilter::default()), records);
    }

    #[test]
    fn test_search_is_idempotent_and_case_insensitive() {
        let records = sample_records();
        for q in ["", "report", "REPORT", "q1", "zzz", " ", "  "] {
            let filter = RecordFilter::new(Choice::All, Choice::All, q);
            let once = filter_records(&records, &filter);
            let twice = filter_records(&once, &filter);
            assert_eq!(once, twice, "query {:?}", q);
        }
        let filter = RecordFilter::new(Choice::All, Choice::All, "AUDIT");
        assert_eq!(ids(&filter_records(&records, &filter)), vec!["IMS-004"]);
    }

    #[test]
    fn test_whitespace_search_is_not_empty() {
        let records = sample_records();
        let filter = RecordFilter::new(Choice::All, Choice::All, "  ");
        assert!(filter_records(&records, &filter).is_empty());

        let filter = RecordFilter::new(Choice::All, Choice::All, " ");
        assert_eq!(filter_records(&records, &filter).len(), 4);
    }

    #[test]
    fn test_conjunction_and_empty_result() {
        let records = sample_records();
        let filter = RecordFilter::new(
            Choice::Only(Category::Security),
            Choice::Only(RecordStatus::Active),
            "",
        );
        assert!(filter_records(&records, &filter).is_empty());

        let filter = RecordFilter::new(Choice::All, Choice::Only(RecordStatus::Draft), "spec");
        assert_eq!(ids(&filter_records(&records, &filter)), vec!["IMS-002"]);
    }

    #[test]
    fn test_sort_after_filter() {
        let records = sample_records();
        let sort = SortState {
            field: RecordField::Priority,
            ascending: false,
        };
        let rows = query_records(&records, &RecordFilter::default(), Some(sort));
        assert_eq!(rows[0].priority, Priority::Critical);
        assert_eq!(rows.len(), records.len());
        assert_eq!(query_records(&records, &RecordFilter::default(), None), records);
    }
}
