//! Page category constants.
//!
//! Every page root carries an `id` of the form `{page}--{category}` and a
//! `data-page-category` attribute with one of the values below.

/// Records table with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Entry form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Metrics and charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Administration and help pages.
pub const PAGE_CAT_SYSTEM: &str = "system";
