//! Small cross-cutting helpers.

pub mod correlation;
#[cfg(test)]
pub(crate) mod log_capture;

pub use correlation::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
