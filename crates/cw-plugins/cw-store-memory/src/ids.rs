//! `IdGenerator` implementations.

use std::sync::atomic::{AtomicU64, Ordering};

use cw_core::IdGenerator;
use uuid::Uuid;

/// Random v4 UUIDs, hyphenated.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// "1", "2", "3", ... Easier to read in demos and logs.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self { next: AtomicU64::new(1) }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }
}
