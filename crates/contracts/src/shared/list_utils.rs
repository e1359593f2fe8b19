//! Generic list helpers: text search, "All"-sentinel choices and column sorting.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Literal used by filter selects for "no constraint on this dimension"
pub const ALL: &str = "All";

/// Trait for items that can be matched against a free-text query
pub trait Searchable {
    /// Whether the item matches an already lowercased, non-empty query
    fn matches_query(&self, query_lower: &str) -> bool;
}

/// Trait for items that can be ordered by a named column
pub trait Sortable {
    type Field: Copy;

    fn compare_by_field(&self, other: &Self, field: Self::Field) -> Ordering;
}

/// Keep the items matching `query`, preserving order. An empty query keeps everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }
    let query_lower = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_query(&query_lower))
        .cloned()
        .collect()
}

/// Stable sort by a column
pub fn sort_list<T: Sortable>(items: &mut [T], field: T::Field, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filter value with an "All" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(expected) => expected == value,
        }
    }
}

impl<T> Choice<T> {
    /// Parse a select value: `"All"` (or empty) is the sentinel, anything else goes through `parse`.
    /// Unknown values fall back to `All`.
    pub fn parse_with(value: &str, parse: impl Fn(&str) -> Option<T>) -> Self {
        if value.is_empty() || value == ALL {
            return Choice::All;
        }
        parse(value).map(Choice::Only).unwrap_or(Choice::All)
    }

    /// Select value for this choice
    pub fn code_with(&self, code: impl Fn(&T) -> String) -> String {
        match self {
            Choice::All => ALL.to_string(),
            Choice::Only(v) => code(v),
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState<F> {
    pub field: F,
    pub ascending: bool,
}

impl<F: PartialEq + Copy> SortState<F> {
    /// Header click: same column flips the direction, another column starts ascending
    pub fn toggle(current: Option<SortState<F>>, field: F) -> SortState<F> {
        match current {
            Some(s) if s.field == field => SortState {
                field,
                ascending: !s.ascending,
            },
            _ => SortState {
                field,
                ascending: true,
            },
        }
    }

    /// Arrow shown next to a column header
    pub fn indicator(current: Option<SortState<F>>, field: F) -> &'static str {
        match current {
            Some(s) if s.field == field => {
                if s.ascending {
                    " ▲"
                } else {
                    " ▼"
                }
            }
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(&'static str, u32);

    impl Searchable for Item {
        fn matches_query(&self, q: &str) -> bool {
            self.0.to_lowercase().contains(q)
        }
    }

    impl Sortable for Item {
        type Field = ();
        fn compare_by_field(&self, other: &Self, _: ()) -> Ordering {
            self.1.cmp(&other.1)
        }
    }

    #[test]
    fn test_filter_list_keeps_order() {
        let items = vec![Item("Alpha", 1), Item("beta", 2), Item("ALPHABET", 3)];
        assert_eq!(filter_list(&items, "alpha"), vec![Item("Alpha", 1), Item("ALPHABET", 3)]);
        assert_eq!(filter_list(&items, ""), items);
        assert!(filter_list(&items, "  ").is_empty());
    }

    #[test]
    fn test_sort_list_descending() {
        let mut items = vec![Item("a", 2), Item("b", 3), Item("c", 1)];
        sort_list(&mut items, (), false);
        assert_eq!(items.iter().map(|i| i.1).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_choice_parsing() {
        let parse = |s: &str| s.parse::<u32>().ok();
        assert_eq!(Choice::parse_with("All", parse), Choice::All);
        assert_eq!(Choice::parse_with("", parse), Choice::All);
        assert_eq!(Choice::parse_with("7", parse), Choice::Only(7));
        assert_eq!(Choice::parse_with("seven", parse), Choice::All);
        assert!(Choice::Only(7).admits(&7));
        assert!(!Choice::Only(7).admits(&8));
        assert!(Choice::<u32>::All.admits(&8));
    }

    #[test]
    fn test_sort_toggle() {
        let first = SortState::toggle(None, 1u8);
        assert!(first.ascending);
        let second = SortState::toggle(Some(first), 1u8);
        assert!(!second.ascending);
        let other = SortState::toggle(Some(second), 2u8);
        assert_eq!(other, SortState { field: 2, ascending: true });
        assert_eq!(SortState::indicator(Some(other), 2u8), " ▲");
        assert_eq!(SortState::indicator(Some(other), 1u8), "");
    }
}
