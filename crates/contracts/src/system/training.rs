//! Training page content: user guide, modules, quick reference and FAQ.

use crate::shared::list_utils::{filter_list, Searchable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideSection {
    pub title: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingModule {
    pub name: String,
    pub duration: String,
    pub status: String,
    pub score: String,
}

impl TrainingModule {
    pub fn is_completed(&self) -> bool {
        self.status == "Completed"
    }
}

/// Fraction of modules completed, `0.0..=1.0`
pub fn completion_ratio(modules: &[TrainingModule]) -> f64 {
    if modules.is_empty() {
        return 0.0;
    }
    let done = modules.iter().filter(|m| m.is_completed()).count();
    done as f64 / modules.len() as f64
}

/// Titled two-or-three column lookup table of the quick reference tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub const FAQ_CATEGORIES: [&str; 5] = [
    "General Usage",
    "Account & Access",
    "Records Management",
    "Technical Issues",
    "Security & Privacy",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub category: String,
    pub question: String,
    pub answer: String,
}

impl Searchable for FaqEntry {
    fn matches_query(&self, query_lower: &str) -> bool {
        self.question.to_lowercase().contains(query_lower)
            || self.answer.to_lowercase().contains(query_lower)
    }
}

pub fn faq_for_category(entries: &[FaqEntry], category: &str) -> Vec<FaqEntry> {
    entries
        .iter()
        .filter(|e| e.category == category)
        .cloned()
        .collect()
}

/// FAQ entries of every category whose question or answer contains `query`
pub fn search_faq(entries: &[FaqEntry], query: &str) -> Vec<FaqEntry> {
    filter_list(entries, query)
}

/// Guide section by title, falling back to the first one
pub fn find_section<'a>(sections: &'a [GuideSection], title: &str) -> Option<&'a GuideSection> {
    sections
        .iter()
        .find(|s| s.title == title)
        .or_else(|| sections.first())
}

// ============================================================================
// Content
// ============================================================================

fn section(title: &str, paragraphs: &[&str]) -> GuideSection {
    GuideSection {
        title: title.to_string(),
        paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn guide_sections() -> Vec<GuideSection> {
    vec![
        section(
            "Getting Started",
            &[
                "Welcome to the Information Management System. This guide helps you get started with the IMS platform.",
                "First steps: log in with your corporate credentials, get familiar with the dashboard layout, learn the sidebar navigation and complete your profile.",
                "The IMS manages information assets: records management, collaboration on records, reporting and security controls.",
                "Tip: start by exploring the Dashboard to get familiar with the system layout.",
            ],
        ),
        section(
            "Navigation & Interface",
            &[
                "The sidebar lists every page of the system. The highlighted entry is the page you are on.",
                "Theme, language and font size can be changed from the preferences panel at any time.",
            ],
        ),
        section(
            "Managing Records",
            &[
                "Creating new records: open Records Management, click \"Add New Record\" and fill in the title and category (both required), then description, priority and tags.",
                "Set the visibility of the record and save it. Save & Continue keeps the form open for the next record.",
                "Organizing records: use categories to group related records, tags for searching, and the search box and filters to find records quickly.",
                "Best practices: use descriptive titles, apply consistent tags and review record statuses regularly.",
            ],
        ),
        section(
            "Creating Reports",
            &[
                "Choose a report type and a time period on the Reports page, then click Generate Report.",
                "Generated reports appear at the top of the report history.",
            ],
        ),
        section(
            "User Management",
            &["Administrators can filter the user directory by role, department and status from the Admin page."],
        ),
        section(
            "System Administration",
            &["System settings, backup schedules and restores are managed from the Admin page tabs."],
        ),
        section(
            "Security & Permissions",
            &["Record visibility is Public, Restricted to selected users, or Private to the author."],
        ),
        section(
            "Troubleshooting",
            &["If something does not work as expected, search the FAQ or submit a support ticket."],
        ),
    ]
}

fn module(name: &str, duration: &str, status: &str, score: &str) -> TrainingModule {
    TrainingModule {
        name: name.to_string(),
        duration: duration.to_string(),
        status: status.to_string(),
        score: score.to_string(),
    }
}

pub fn training_modules() -> Vec<TrainingModule> {
    vec![
        module("System Basics", "30 min", "Completed", "95%"),
        module("Record Management", "45 min", "Completed", "88%"),
        module("Collaboration Features", "25 min", "Completed", "92%"),
        module("Report Generation", "35 min", "In Progress", "65%"),
        module("Advanced Search", "20 min", "Not Started", "-"),
        module("Security & Permissions", "40 min", "Not Started", "-"),
        module("System Administration", "60 min", "Not Started", "-"),
        module("Troubleshooting", "30 min", "Not Started", "-"),
    ]
}

fn table(title: &str, columns: &[&str], rows: &[&[&str]]) -> ReferenceTable {
    ReferenceTable {
        title: title.to_string(),
        columns: columns.iter().map(|c| c.to_string()).collect(),
        rows: rows
            .iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    }
}

pub fn quick_reference() -> Vec<ReferenceTable> {
    vec![
        table(
            "Keyboard Shortcuts",
            &["Action", "Shortcut"],
            &[
                &["New Record", "Ctrl + N"],
                &["Search", "Ctrl + F"],
                &["Save", "Ctrl + S"],
                &["Print", "Ctrl + P"],
                &["Help", "F1"],
                &["Refresh", "F5"],
                &["Logout", "Ctrl + L"],
            ],
        ),
        table(
            "Search Operators",
            &["Operator", "Example", "Description"],
            &[
                &["AND", "contract AND legal", "Both terms"],
                &["OR", "budget OR finance", "Either term"],
                &["NOT", "project NOT archived", "Exclude term"],
                &["\"quotes\"", "\"project plan\"", "Exact phrase"],
                &["*", "proj*", "Wildcard"],
            ],
        ),
        table(
            "Status Indicators",
            &["Status", "Description"],
            &[
                &["Active", "Record is active and current"],
                &["Pending", "Awaiting review or approval"],
                &["Inactive", "Record is disabled"],
                &["Draft", "Work in progress"],
                &["Complete", "Task or process finished"],
                &["Processing", "System is working"],
            ],
        ),
        table(
            "Priority Levels",
            &["Level", "Color", "When to Use"],
            &[
                &["Critical", "Red", "Immediate attention required"],
                &["High", "Orange", "Important, handle soon"],
                &["Medium", "Yellow", "Normal priority"],
                &["Low", "Green", "Handle when convenient"],
            ],
        ),
    ]
}

fn faq(category: &str, question: &str, answer: &str) -> FaqEntry {
    FaqEntry {
        category: category.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

pub fn faq_entries() -> Vec<FaqEntry> {
    vec![
        faq(
            "General Usage",
            "How do I navigate the system?",
            "Use the sidebar navigation menu: Dashboard for overview and quick stats, Records for your documents, Reports for analytics and Admin for system administration.",
        ),
        faq(
            "General Usage",
            "How do I search for records?",
            "Type keywords in the search box of the Records page and narrow the results with the category and status filters.",
        ),
        faq(
            "General Usage",
            "Can I customize the dashboard?",
            "You can switch between the dark and light theme, change the language and pick a font size from the preferences panel.",
        ),
        faq(
            "Account & Access",
            "How do I reset my password?",
            "Ask an administrator to reset it from the user management tab, or submit an Account Access support ticket.",
        ),
        faq(
            "Records Management",
            "What file types can I upload?",
            "Documents (PDF, DOC, DOCX, TXT, RTF), spreadsheets (XLS, XLSX, CSV), images (PNG, JPG, GIF) and archives (ZIP, RAR), up to 10MB per file.",
        ),
        faq(
            "Records Management",
            "How do I set record permissions?",
            "Choose the visibility when creating the record: Public for all users, Restricted for selected users only, or Private for yourself.",
        ),
        faq(
            "Technical Issues",
            "What are the system backup procedures?",
            "Backups run on the configured schedule. Administrators can also start a backup manually from the Backup & Restore tab.",
        ),
        faq(
            "Security & Privacy",
            "Who can see my records?",
            "Record sharing permissions follow the record visibility. Restricted records are visible only to the assigned users.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_faq_spans_categories() {
        let entries = faq_entries();
        let hits = search_faq(&entries, "BACKUP");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].category, "Technical Issues");

        let hits = search_faq(&entries, "visibility");
        let categories: Vec<&str> = hits.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, vec!["Records Management", "Security & Privacy"]);
    }

    #[test]
    fn test_empty_faq_query_matches_all() {
        let entries = faq_entries();
        assert_eq!(search_faq(&entries, ""), entries);
        assert!(search_faq(&entries, "   ").is_empty());
        assert!(search_faq(&entries, "quantum").is_empty());
    }

    #[test]
    fn test_faq_for_category_and_sections() {
        let entries = faq_entries();
        assert_eq!(faq_for_category(&entries, "General Usage").len(), 3);
        let sections = guide_sections();
        assert_eq!(sections.len(), 8);
        assert_eq!(find_section(&sections, "Managing Records").map(|s| s.title.as_str()), Some("Managing Records"));
        assert_eq!(find_section(&sections, "Nope").map(|s| s.title.as_str()), Some("Getting Started"));
    }

    #[test]
    fn test_completion_ratio() {
        assert_eq!(completion_ratio(&training_modules()), 0.375);
        assert_eq!(completion_ratio(&[]), 0.0);
    }
}
