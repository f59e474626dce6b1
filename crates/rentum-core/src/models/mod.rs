//! Data models for documents, reviews and scan records.

pub mod config;
pub mod document;
pub mod review;
pub mod scan;
