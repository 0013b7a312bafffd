//! edgemore-core
//!
//! Pure domain types for the estimate service: the submitted estimate request
//! and attachment filename conventions. No PDF or SMTP dependency.

pub mod filenames;
pub mod models;
