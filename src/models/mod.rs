//! Data models for the HR dashboard cache.
//!
//! Wire types mirror the backend JSON payloads; every field decodes with a
//! default so a shape mismatch degrades to zeros/empties instead of erroring.

mod candidate;
mod identity;
mod job;
mod snapshot;

pub use candidate::*;
pub use identity::*;
pub use job::*;
pub use snapshot::*;
