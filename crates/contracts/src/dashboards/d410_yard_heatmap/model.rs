use crate::enums::{UnitStatus, Zone};
use serde::{Deserialize, Serialize};

/// Physical address of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotKey {
    pub zone: Zone,
    pub row: u32,
    pub lane: u32,
}

impl SlotKey {
    pub fn new(zone: Zone, row: u32, lane: u32) -> Self {
        Self { zone, row, lane }
    }

    /// Location string `zone-row-lane`, e.g. "A-3-12"
    pub fn location(&self) -> String {
        format!("{}-{}-{}", self.zone, self.row, self.lane)
    }

    /// Stable DOM id of the slot cell
    pub fn dom_id(&self) -> String {
        format!("slot-{}-{}-{}", self.zone, self.row, self.lane)
    }
}

/// Validated occupant summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSummary {
    pub id: String,
    pub status: UnitStatus,
    /// Lower rank leaves the yard sooner
    pub fifo_rank: Option<u32>,
    /// Days in yard
    pub aging: u32,
    pub brand: String,
    pub engine_number: String,
    pub chassis_number: String,
    pub bl_number: Option<String>,
}

/// Validated yard slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub key: SlotKey,
    pub is_active: bool,
    pub occupant: Option<UnitSummary>,
}

impl Slot {
    /// Occupant of an active slot. Inactive slots never count as occupied,
    /// even if the payload carries occupant data for them.
    pub fn active_occupant(&self) -> Option<&UnitSummary> {
        if self.is_active {
            self.occupant.as_ref()
        } else {
            None
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.active_occupant().is_some()
    }

    /// Only occupied active slots open the detail card
    pub fn is_selectable(&self) -> bool {
        self.is_occupied()
    }
}
