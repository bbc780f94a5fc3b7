//! Domain types for fare computation.
//!
//! All types enforce their invariants at construction time: a `TapRecord`
//! that exists has a valid timestamp, so fare computation never fails.

mod fare;
mod tap;
mod timestamp;

pub use fare::Fare;
pub use tap::TapRecord;
pub use timestamp::{ParseError, TapTime};
