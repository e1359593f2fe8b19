pub mod config;
pub mod i18n;
pub mod list_utils;
pub mod navigation;
pub mod sample_data;
pub mod session;
pub mod style;
pub mod view_tree;
