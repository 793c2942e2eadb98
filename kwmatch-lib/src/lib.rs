#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for kwmatch
//!
//! This library consolidates all functionality for the kwmatch tool, which compares
//! keyword and search term performance across keyword match types.
//!
//! # Module Organization
//!
//! - [`records`]: Raw report rows, match type normalization, metric extraction and enrichment
//! - [`metrics`]: Typed metric values and the fixed metric × match type slot layout
//! - [`aggregate`]: Grouping of enriched records under configurable keys
//! - [`views`]: View definitions, qualification filters and row projection
//! - [`source`]: File-backed report sources
//! - [`reports`]: Tabular sinks and report generation in multiple formats
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod aggregate;
pub mod metrics;
pub mod records;
pub mod views;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod source;
#[cfg(not(any(debug_assertions, test)))]
mod source;

pub use crate::commands::{Host, run};
