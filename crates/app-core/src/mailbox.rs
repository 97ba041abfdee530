//! Single-slot hand-off of analyzer output to the frame loop.
//!
//! The analyzer overwrites the slot whenever it produces a snapshot; the frame
//! loop copies the newest one at most once per frame. There is no queue: a
//! snapshot that is overwritten before anyone reads it is simply lost.

use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct Slot {
    bins: Vec<f32>,
    sequence: u64,
}

#[derive(Default)]
pub struct BinMailbox {
    slot: Mutex<Slot>,
}

pub type SharedMailbox = Arc<BinMailbox>;

impl BinMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedMailbox {
        Arc::new(Self::new())
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        // A panicking publisher leaves at worst a half-written snapshot.
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace the current snapshot, reusing the slot's allocation.
    pub fn publish(&self, bins: &[f32]) {
        let mut slot = self.lock();
        slot.bins.clear();
        slot.bins.extend_from_slice(bins);
        slot.sequence += 1;
    }

    /// Number of snapshots published so far.
    pub fn sequence(&self) -> u64 {
        self.lock().sequence
    }

    /// Copy the snapshot into `dst` if it is newer than `seen`. Returns the
    /// sequence of the copied snapshot.
    pub fn read_newer(&self, seen: u64, dst: &mut Vec<f32>) -> Option<u64> {
        let slot = self.lock();
        if slot.sequence == seen {
            return None;
        }
        dst.clear();
        dst.extend_from_slice(&slot.bins);
        Some(slot.sequence)
    }
}
