use crate::shared::i18n::TextKey;
use serde::{Deserialize, Serialize};

/// Single headline figure with its change indicator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: TextKey,
    pub value: String,
    /// e.g. "23 this week"; empty when there is no trend
    pub delta: String,
}

impl Metric {
    pub fn new(label: TextKey, value: &str, delta: &str) -> Self {
        Self {
            label,
            value: value.to_string(),
            delta: delta.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u32,
}

/// Static illustrative chart data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: TextKey,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(title: TextKey, kind: ChartKind, points: &[(&str, u32)]) -> Self {
        Self {
            title,
            kind,
            points: points
                .iter()
                .map(|(label, value)| ChartPoint {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    /// Largest value, used to scale bars
    pub fn max_value(&self) -> u32 {
        self.points.iter().map(|p| p.value).max().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.points.iter().map(|p| p.value).sum()
    }
}

/// Row of the dashboard's recent activity table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRow {
    pub action: String,
    pub user: String,
    pub time: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_aggregates() {
        let series = ChartSeries::new(
            TextKey::RecordsByCategory,
            ChartKind::Pie,
            &[("Legal", 245), ("Technical", 389)],
        );
        assert_eq!(series.max_value(), 389);
        assert_eq!(series.total(), 634);
        let empty = ChartSeries::new(TextKey::RecordsByCategory, ChartKind::Bar, &[]);
        assert_eq!(empty.max_value(), 0);
    }
}
