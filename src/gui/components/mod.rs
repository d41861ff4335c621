// src/gui/components/mod.rs
pub mod action_buttons;
pub mod category_table;
pub mod metrics_row;
pub mod movie_table;
pub mod preview;
