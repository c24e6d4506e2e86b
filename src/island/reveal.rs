//! Staggered reveal scheduling for newly added tiles
//!
//! An expansion returns a [`RevealBatch`]: the newly added coordinates in
//! row-major order, each with a millisecond offset at which its entering state
//! clears, plus a total duration after which the batch completes. The batch is
//! plain data driven by a caller-supplied [`Clock`], so tests can advance a
//! virtual clock instead of waiting on wall time. A cancelled batch stops
//! applying reveals but never rolls back model state.

use crate::island::model::Island;
use crate::island::range::Coord;

/// One scheduled reveal within a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    /// Milliseconds after expansion at which the tile reveals
    pub at_ms: u64,
    /// Coordinate of the tile to reveal
    pub coord: Coord,
}

/// Cancellable batch of scheduled reveals with a single completion time
#[derive(Debug, Clone)]
pub struct RevealBatch {
    steps: Vec<RevealStep>,
    total_ms: u64,
    next: usize,
    cancelled: bool,
}

impl RevealBatch {
    /// Build a batch from newly added coordinates
    ///
    /// Coordinates are ordered by ascending y then ascending x, and the total
    /// duration is divided evenly: step `i` of `n` fires at
    /// `round(i * total / n)`. An empty batch completes immediately.
    pub fn new(mut coords: Vec<Coord>, total_ms: u64) -> Self {
        coords.sort_by_key(|coord| coord.row_major_key());

        let count = coords.len();
        let step = if count == 0 {
            0.0
        } else {
            total_ms as f64 / count as f64
        };

        let steps = coords
            .into_iter()
            .enumerate()
            .map(|(index, coord)| RevealStep {
                at_ms: (step * index as f64).round() as u64,
                coord,
            })
            .collect();

        Self {
            steps,
            total_ms: if count == 0 { 0 } else { total_ms },
            next: 0,
            cancelled: false,
        }
    }

    /// All scheduled steps in firing order
    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    /// Time at which the batch completes, in milliseconds after expansion
    pub const fn total_ms(&self) -> u64 {
        self.total_ms
    }

    /// Stop applying any further reveals
    pub const fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the batch has been cancelled
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Whether every step has been taken or the batch was cancelled
    pub const fn is_drained(&self) -> bool {
        self.cancelled || self.next >= self.steps.len()
    }

    /// Firing time of the next untaken step, if any
    pub fn next_at(&self) -> Option<u64> {
        if self.cancelled {
            return None;
        }
        self.steps.get(self.next).map(|step| step.at_ms)
    }

    /// Take every untaken step due at or before `now_ms`, in firing order
    pub fn take_due(&mut self, now_ms: u64) -> Vec<Coord> {
        if self.cancelled {
            return Vec::new();
        }
        let due: Vec<Coord> = self
            .steps
            .iter()
            .skip(self.next)
            .take_while(|step| step.at_ms <= now_ms)
            .map(|step| step.coord)
            .collect();
        self.next += due.len();
        due
    }
}

/// Source of elapsed time for driving a reveal batch
pub trait Clock {
    /// Block until `ms` milliseconds have passed
    fn sleep_ms(&mut self, ms: u64);
}

/// Clock backed by [`std::thread::sleep`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep_ms(&mut self, ms: u64) {
        std::thread::sleep(std::time::Duration::from_millis(ms));
    }
}

/// Drive a batch to completion against the given clock
///
/// Applies each due reveal to the island in firing order, invoking the
/// observer with the count of revealed tiles so far, then waits out the
/// remainder of the total duration. Returns once the batch completes or
/// is cancelled.
pub fn play<C: Clock>(
    island: &mut Island,
    batch: &mut RevealBatch,
    clock: &mut C,
    mut observer: impl FnMut(usize, usize),
) {
    let total_steps = batch.steps().len();
    let mut now = 0u64;
    let mut revealed = 0usize;

    while !batch.is_drained() {
        let Some(next_at) = batch.next_at() else {
            break;
        };
        if next_at > now {
            clock.sleep_ms(next_at - now);
            now = next_at;
        }
        for coord in batch.take_due(now) {
            island.reveal(coord);
            revealed += 1;
            observer(revealed, total_steps);
        }
    }

    if !batch.is_cancelled() && now < batch.total_ms() {
        clock.sleep_ms(batch.total_ms() - now);
    }
}
