//! Data models for tables and configuration.

pub mod config;
pub mod table;
