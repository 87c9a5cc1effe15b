use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

const ID_RANGE: i64 = 1_000_000_000;

/// Produces quiz ids. Neither strategy checks issued values against the
/// store: a collision silently overwrites the earlier quiz (upsert
/// semantics), and callers accept that.
pub trait QuizIdGenerator: Send + Sync {
    fn generate(&self) -> i64;
}

/// Legacy placeholder strategy: wall-clock milliseconds reduced into
/// [0, 1_000_000_000). Two calls within the same millisecond collide.
#[derive(Debug, Default)]
pub struct ClockIdGenerator;

impl QuizIdGenerator for ClockIdGenerator {
    fn generate(&self) -> i64 {
        Utc::now().timestamp_millis() % ID_RANGE
    }
}

/// Default strategy: an atomic counter seeded from the wall clock at
/// startup. Monotonic within a process; a restart can re-seed into a
/// previously issued range.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    next: AtomicI64,
}

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self {
            next: AtomicI64::new(Utc::now().timestamp_millis() % ID_RANGE),
        }
    }
}

impl Default for SequenceIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizIdGenerator for SequenceIdGenerator {
    fn generate(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
