// src/core/mod.rs

pub mod fetch;
pub mod html;
