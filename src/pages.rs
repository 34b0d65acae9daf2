//! Page generation modules for the report
//!
//! This module organizes HTML page generators by page type (analysis
//! report, job recommendations, Q&A transcript). Each page module handles
//! its specific view logic and utilizes shared components from the
//! components module.

pub mod jobs;
pub mod qa;
pub mod report;
