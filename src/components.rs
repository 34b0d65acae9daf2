//! Reusable HTML components for report generation
//!
//! This module provides Maud component functions shared across the report
//! pages (analysis, jobs, Q&A). Components handle specific UI elements
//! with consistent styling, eliminating duplication across page
//! generators.

pub mod alerts;
pub mod footer;
pub mod layout;
pub mod nav;
