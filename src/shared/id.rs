//! Resource ID Generator
//!
//! Snowflake-style time-ordered IDs rendered as prefixed strings
//! (`thread-8830197746077696`).

use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;

/// Custom epoch (2025-01-01T00:00:00.000Z)
const FORUM_EPOCH: u64 = 1_735_689_600_000;

const MACHINE_BITS: u64 = 10;
const SEQUENCE_BITS: u64 = 12;
const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;

#[derive(Debug, Default)]
struct GeneratorState {
    last_timestamp: u64,
    sequence: u64,
}

/// Generates unique, roughly time-ordered resource IDs.
#[derive(Debug)]
pub struct IdGenerator {
    machine_id: u64,
    state: Mutex<GeneratorState>,
}

impl IdGenerator {
    /// Create a new generator; only the low 10 bits of `machine_id` are used.
    pub fn new(machine_id: u16) -> Self {
        Self {
            machine_id: u64::from(machine_id) & ((1 << MACHINE_BITS) - 1),
            state: Mutex::new(GeneratorState::default()),
        }
    }

    /// Generate the next raw snowflake.
    pub fn next_raw(&self) -> u64 {
        let mut state = self.state.lock();
        let mut timestamp = current_millis().max(state.last_timestamp);

        if timestamp == state.last_timestamp {
            state.sequence = (state.sequence + 1) & SEQUENCE_MASK;
            if state.sequence == 0 {
                // Sequence exhausted for this millisecond, borrow the next one.
                timestamp += 1;
            }
        } else {
            state.sequence = 0;
        }
        state.last_timestamp = timestamp;

        ((timestamp - FORUM_EPOCH) << (MACHINE_BITS + SEQUENCE_BITS))
            | (self.machine_id << SEQUENCE_BITS)
            | state.sequence
    }

    /// Generate an ID for the given resource kind, e.g. `comment-…`.
    pub fn next_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_raw())
    }
}

fn current_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(FORUM_EPOCH)
        .max(FORUM_EPOCH)
}

/// Extract the creation timestamp (unix millis) from a raw snowflake.
pub fn extract_timestamp(raw: u64) -> u64 {
    (raw >> (MACHINE_BITS + SEQUENCE_BITS)) + FORUM_EPOCH
}
