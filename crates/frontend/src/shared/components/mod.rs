pub mod chart;
pub mod data_table;
pub mod metric_grid;
pub mod notice_bar;
pub mod tab_strip;
pub mod ui;
