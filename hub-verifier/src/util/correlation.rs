//! Per-request correlation identifiers.
//!
//! Identifiers only tie log lines together; they carry no business meaning
//! and never appear in responses.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::prelude::*;

/// Number of random bytes in a generated identifier.
const ID_BYTES: usize = 16;

/// Source of fresh correlation identifiers.
pub trait IdGenerator: Send + Sync {
    /// Produce a new, unique identifier.
    fn next_id(&self) -> String;
}

/// Random hex identifiers drawn from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        let mut bytes = [0u8; ID_BYTES];
        thread_rng().fill(&mut bytes[..]);
        hex::encode(bytes)
    }
}

/// Deterministic `prefix-N` identifiers, counting up from 1.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}
