//! edgemore-export
//!
//! Estimate document composition and PDF rendering.

pub mod compose;
pub mod error;
pub mod layout;
pub mod metrics;
pub mod pdf;
pub mod styles;
