//! Turn history tracking.
//!
//! An immutable record of the moves applied to a cube, in order, from which
//! the undo sequence can be derived.

use super::moves::Move;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single applied move and when it happened.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TurnRecord {
    pub mv: Move,
    pub timestamp: DateTime<Utc>,
}

impl TurnRecord {
    /// Record `mv` as applied now.
    pub fn now(mv: Move) -> Self {
        Self {
            mv,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of applied moves.
///
/// `record` returns a new history rather than mutating in place.
///
/// # Example
///
/// ```rust
/// use rubik_state::turns::{Move, Turn, TurnHistory, TurnRecord};
///
/// let history = TurnHistory::new()
///     .record(TurnRecord::now(Move::clockwise(Turn::Front)))
///     .record(TurnRecord::now(Move::counter_clockwise(Turn::Top)));
///
/// assert_eq!(
///     history.undo_sequence(),
///     vec![Move::clockwise(Turn::Top), Move::counter_clockwise(Turn::Front)]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnHistory {
    records: Vec<TurnRecord>,
}

impl TurnHistory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a move, returning a new history.
    pub fn record(&self, record: TurnRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Append in place; used by owners that already hold the history mutably.
    pub(crate) fn push(&mut self, record: TurnRecord) {
        self.records.push(record);
    }

    pub(crate) fn pop(&mut self) -> Option<TurnRecord> {
        self.records.pop()
    }

    /// Split off the most recent record, returning it with the history that
    /// precedes it.
    pub fn rewind(&self) -> Option<(TurnRecord, Self)> {
        let (last, rest) = self.records.split_last()?;
        Some((
            *last,
            Self {
                records: rest.to_vec(),
            },
        ))
    }

    /// Moves in the order they were applied.
    pub fn moves(&self) -> Vec<Move> {
        self.records.iter().map(|record| record.mv).collect()
    }

    /// Moves that return the cube to where the history started.
    pub fn undo_sequence(&self) -> Vec<Move> {
        self.records
            .iter()
            .rev()
            .map(|record| record.mv.inverse())
            .collect()
    }

    /// Time between the first and last recorded move.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
