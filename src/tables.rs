//! Remote data table configuration
//!
//! Builds the settings object for the frontend's tabular widget (remote
//! JSON source, column definitions, localization resource) and mounts the
//! widget through the [`mailfilter_tables::TableWidget`] seam.

// Re-export all mailfilter-tables functionality
pub use mailfilter_tables::*;
