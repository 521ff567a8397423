//! Schema check at the fetch boundary.
//!
//! The backend payload is decoded element by element so that one malformed
//! record cannot blank the whole map. Valid records become [`Slot`]s, the
//! rest are returned as [`RejectedRecord`]s for logging.

use super::dto::{SlotRecord, UnitSummaryRecord};
use super::model::{Slot, SlotKey, UnitSummary};
use crate::enums::Zone;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("cannot decode record: {0}")]
    Decode(String),
    #[error("unknown zone '{0}'")]
    UnknownZone(String),
    #[error("{field} must be a positive integer, got {value}")]
    NotPositive { field: &'static str, value: i64 },
    #[error("aging must not be negative, got {0}")]
    NegativeAging(i64),
    #[error("occupant id is empty")]
    MissingOccupantId,
    #[error("slot {0} appears more than once")]
    DuplicateSlot(String),
}

/// A record that failed validation, with its position in the payload
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub index: usize,
    pub reason: RecordError,
}

/// A `fifoRank` of zero or less, kept as "no rank"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoredRank {
    pub key: SlotKey,
    pub value: i64,
}

/// Result of validating one payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotBatch {
    pub slots: Vec<Slot>,
    pub rejected: Vec<RejectedRecord>,
    pub ignored_ranks: Vec<IgnoredRank>,
}

impl SlotBatch {
    /// FIFO ranks held by more than one occupied slot, ascending
    pub fn duplicate_ranks(&self) -> Vec<u32> {
        let mut seen: HashMap<u32, usize> = HashMap::new();
        for rank in self
            .slots
            .iter()
            .filter_map(|s| s.active_occupant().and_then(|u| u.fifo_rank))
        {
            *seen.entry(rank).or_default() += 1;
        }
        let mut dups: Vec<u32> = seen
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(rank, _)| rank)
            .collect();
        dups.sort_unstable();
        dups
    }
}

fn positive(field: &'static str, value: i64) -> Result<u32, RecordError> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or(RecordError::NotPositive { field, value })
}

impl TryFrom<UnitSummaryRecord> for UnitSummary {
    type Error = RecordError;

    fn try_from(rec: UnitSummaryRecord) -> Result<Self, Self::Error> {
        if rec.id.trim().is_empty() {
            return Err(RecordError::MissingOccupantId);
        }
        let aging = u32::try_from(rec.aging).map_err(|_| RecordError::NegativeAging(rec.aging))?;
        // Zero or negative means the backend has not ranked the unit yet
        let fifo_rank = rec
            .fifo_rank
            .and_then(|rank| positive("fifoRank", rank).ok());

        Ok(UnitSummary {
            id: rec.id,
            status: rec.status,
            fifo_rank,
            aging,
            brand: rec.brand.unwrap_or_default(),
            engine_number: rec.engine_number.unwrap_or_default(),
            chassis_number: rec.chassis_number.unwrap_or_default(),
            bl_number: rec.bl_number.filter(|bl| !bl.trim().is_empty()),
        })
    }
}

impl TryFrom<SlotRecord> for Slot {
    type Error = RecordError;

    fn try_from(rec: SlotRecord) -> Result<Self, Self::Error> {
        let zone = Zone::from_code(&rec.zone).ok_or_else(|| RecordError::UnknownZone(rec.zone.clone()))?;
        let row = positive("row", rec.row)?;
        let lane = positive("lane", rec.lane)?;
        let occupant = rec.occupant.map(UnitSummary::try_from).transpose()?;

        Ok(Slot {
            key: SlotKey::new(zone, row, lane),
            is_active: rec.is_active,
            occupant,
        })
    }
}

/// Validate a decoded JSON array of slot records.
///
/// Later duplicates of an address are rejected; the first one wins.
pub fn validate_slots(values: Vec<serde_json::Value>) -> SlotBatch {
    let mut batch = SlotBatch::default();
    let mut seen: HashSet<SlotKey> = HashSet::new();

    for (index, value) in values.into_iter().enumerate() {
        let mut raw_rank = None;
        let parsed = serde_json::from_value::<SlotRecord>(value)
            .map_err(|e| RecordError::Decode(e.to_string()))
            .and_then(|rec| {
                raw_rank = rec.occupant.as_ref().and_then(|o| o.fifo_rank);
                Slot::try_from(rec)
            })
            .and_then(|slot| {
                if seen.insert(slot.key) {
                    Ok(slot)
                } else {
                    Err(RecordError::DuplicateSlot(slot.key.location()))
                }
            });

        match parsed {
            Ok(slot) => {
                if let Some(value) = raw_rank.filter(|rank| *rank <= 0) {
                    batch.ignored_ranks.push(IgnoredRank { key: slot.key, value });
                }
                batch.slots.push(slot);
            }
            Err(reason) => batch.rejected.push(RejectedRecord { index, reason }),
        }
    }

    batch
}
