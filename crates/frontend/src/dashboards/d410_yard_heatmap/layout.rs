use contracts::dashboards::d410_yard_heatmap::Slot;
use contracts::enums::Zone;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct RowLayout {
    pub row: u32,
    /// Lanes ascending
    pub slots: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneLayout {
    pub zone: Zone,
    /// Rows ascending
    pub rows: Vec<RowLayout>,
}

impl ZoneLayout {
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.rows.iter().flat_map(|r| r.slots.iter())
    }
}

/// Group slots by zone, then row, then lane.
///
/// Zones come out in [`Zone::display_order`]; zones without slots are
/// skipped. The geometry depends only on the slot addresses, never on
/// occupancy or filters.
pub fn build_layout(slots: &[Slot]) -> Vec<ZoneLayout> {
    let mut grouped: BTreeMap<Zone, BTreeMap<u32, Vec<Slot>>> = BTreeMap::new();
    for slot in slots {
        grouped
            .entry(slot.key.zone)
            .or_default()
            .entry(slot.key.row)
            .or_default()
            .push(slot.clone());
    }

    Zone::display_order()
        .into_iter()
        .filter_map(|zone| {
            let rows = grouped.remove(&zone)?;
            let rows = rows
                .into_iter()
                .map(|(row, mut slots)| {
                    slots.sort_by_key(|s| s.key.lane);
                    RowLayout { row, slots }
                })
                .collect();
            Some(ZoneLayout { zone, rows })
        })
        .collect()
}

/// Slots in the order they are drawn
pub fn slots_in_display_order(layout: &[ZoneLayout]) -> impl Iterator<Item = &Slot> {
    layout.iter().flat_map(|z| z.slots())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_yard_heatmap::test_support::{empty, in_zone};
    use contracts::dashboards::d410_yard_heatmap::SlotKey;

    #[test]
    fn test_rows_and_lanes_sorted_whatever_the_input_order() {
        let slots = vec![
            in_zone(empty(2, 3), Zone::A),
            in_zone(empty(1, 2), Zone::A),
            in_zone(empty(2, 1), Zone::A),
            in_zone(empty(1, 1), Zone::A),
        ];
        let layout = build_layout(&slots);
        assert_eq!(layout.len(), 1);

        let zone = &layout[0];
        assert_eq!(zone.rows.iter().map(|r| r.row).collect::<Vec<_>>(), vec![1, 2]);
        let lanes: Vec<Vec<u32>> = zone
            .rows
            .iter()
            .map(|r| r.slots.iter().map(|s| s.key.lane).collect())
            .collect();
        assert_eq!(lanes, vec![vec![1, 2], vec![1, 3]]);
    }

    #[test]
    fn test_zones_follow_display_order() {
        let slots = vec![
            in_zone(empty(1, 1), Zone::A),
            in_zone(empty(1, 1), Zone::E),
            in_zone(empty(1, 1), Zone::C),
        ];
        let layout = build_layout(&slots);
        let zones: Vec<Zone> = layout.iter().map(|z| z.zone).collect();
        assert_eq!(zones, vec![Zone::E, Zone::C, Zone::A]);

        let keys: Vec<SlotKey> = slots_in_display_order(&layout).map(|s| s.key).collect();
        assert_eq!(keys[0], SlotKey::new(Zone::E, 1, 1));
        assert_eq!(keys[2], SlotKey::new(Zone::A, 1, 1));
    }

    #[test]
    fn test_empty_input() {
        assert!(build_layout(&[]).is_empty());
    }
}
