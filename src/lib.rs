//! Minuta — meeting transcript summarization and extraction.
//!
//! The pipeline turns raw meeting text into three artifacts:
//! an abstractive summary (via a pluggable backend), flagged action
//! items, and calendar dates resolved from natural-language mentions
//! ("next Friday", "March 5"). Results can be rendered to PDF and are
//! served over a local axum HTTP API.

pub mod api;
pub mod config;
pub mod export;
pub mod pipeline;
