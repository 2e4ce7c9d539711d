//! # Domain Layer
//!
//! Pure text processing: the extraction pipeline, timing, and summaries.
//! Nothing here suspends or fails outward.

pub mod errors;
pub mod pipeline;
pub mod summary;
pub mod timing;
