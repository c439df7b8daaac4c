//! Validation-based wiring audit.
//!
//! Dispatch checks targets lazily, one transition at a time. The audit
//! walks the whole machine instead and uses Stillwater's `Validation` to
//! report every violation in a single pass rather than stopping at the
//! first one.

pub mod rules;
pub mod violations;

pub use violations::WiringViolation;
