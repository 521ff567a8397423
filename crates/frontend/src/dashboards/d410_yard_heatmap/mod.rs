pub mod api;
pub mod filters;
pub mod heat;
pub mod layout;
pub mod picking_list;
pub mod search;
pub mod state;
pub mod summary;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support {
    use contracts::dashboards::d410_yard_heatmap::{Slot, SlotKey, UnitSummary};
    use contracts::enums::{UnitStatus, Zone};

    pub fn unit(rank: Option<u32>, aging: u32) -> UnitSummary {
        UnitSummary {
            id: format!("unit-{}", rank.unwrap_or(0)),
            status: UnitStatus::Ready,
            fifo_rank: rank,
            aging,
            brand: "Isuzu".to_string(),
            engine_number: format!("ENG-{}", rank.unwrap_or(0)),
            chassis_number: format!("CH-{}", rank.unwrap_or(0)),
            bl_number: None,
        }
    }

    /// Occupied active slot in zone A
    pub fn occupied(row: u32, lane: u32, rank: Option<u32>, aging: u32) -> Slot {
        Slot {
            key: SlotKey::new(Zone::A, row, lane),
            is_active: true,
            occupant: Some(unit(rank, aging)),
        }
    }

    pub fn empty(row: u32, lane: u32) -> Slot {
        Slot {
            key: SlotKey::new(Zone::A, row, lane),
            is_active: true,
            occupant: None,
        }
    }

    pub fn inactive(row: u32, lane: u32) -> Slot {
        Slot {
            is_active: false,
            ..empty(row, lane)
        }
    }

    pub fn in_zone(mut slot: Slot, zone: Zone) -> Slot {
        slot.key.zone = zone;
        slot
    }

    pub fn with_status(mut slot: Slot, status: UnitStatus) -> Slot {
        if let Some(unit) = slot.occupant.as_mut() {
            unit.status = status;
        }
        slot
    }

    pub fn with_ids(
        mut slot: Slot,
        brand: &str,
        engine: &str,
        chassis: &str,
        bl: Option<&str>,
    ) -> Slot {
        if let Some(unit) = slot.occupant.as_mut() {
            unit.brand = brand.to_string();
            unit.engine_number = engine.to_string();
            unit.chassis_number = chassis.to_string();
            unit.bl_number = bl.map(str::to_string);
        }
        slot
    }
}
