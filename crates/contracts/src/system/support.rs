//! Support tickets raised from the training page.

use crate::shared::i18n::TextKey;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ISSUE_TYPES: [&str; 6] = [
    "Technical Problem",
    "Account Access",
    "Feature Request",
    "Training Question",
    "Bug Report",
    "Other",
];

pub const TICKET_PRIORITIES: [&str; 4] = ["Low", "Medium", "High", "Urgent"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In Progress",
            TicketStatus::Resolved => "Resolved",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// `IMS-YYYY-NNN`
    pub id: String,
    pub subject: String,
    pub issue_type: String,
    pub status: TicketStatus,
    pub created: NaiveDate,
    pub priority: String,
}

/// Ticket form as submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketDraft {
    pub issue_type: String,
    pub priority: String,
    pub subject: String,
    pub description: String,
}

impl Default for TicketDraft {
    fn default() -> Self {
        Self {
            issue_type: ISSUE_TYPES[0].to_string(),
            priority: TICKET_PRIORITIES[0].to_string(),
            subject: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("ticket subject is required")]
    SubjectRequired,
}

impl TicketError {
    pub fn message_key(&self) -> TextKey {
        match self {
            TicketError::SubjectRequired => TextKey::TicketSubjectRequired,
        }
    }
}

pub fn next_ticket_id(existing: &[Ticket], today: NaiveDate) -> String {
    format!("IMS-{}-{:03}", today.year(), existing.len() + 1)
}

impl TicketDraft {
    pub fn submit(&self, existing: &[Ticket], today: NaiveDate) -> Result<Ticket, TicketError> {
        let subject = self.subject.trim();
        if subject.is_empty() {
            return Err(TicketError::SubjectRequired);
        }
        Ok(Ticket {
            id: next_ticket_id(existing, today),
            subject: subject.to_string(),
            issue_type: self.issue_type.clone(),
            status: TicketStatus::Open,
            created: today,
            priority: self.priority.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sample_data::sample_tickets;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 22).unwrap()
    }

    #[test]
    fn test_submit_numbers_after_existing_tickets() {
        let draft = TicketDraft {
            subject: " Export fails ".into(),
            priority: "High".into(),
            ..Default::default()
        };
        let ticket = draft.submit(&sample_tickets(), today()).unwrap();
        assert_eq!(ticket.id, "IMS-2024-003");
        assert_eq!(ticket.subject, "Export fails");
        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.created, today());
    }

    #[test]
    fn test_blank_subject_rejected() {
        let draft = TicketDraft { subject: "   ".into(), ..Default::default() };
        assert_eq!(draft.submit(&[], today()), Err(TicketError::SubjectRequired));
    }
}
