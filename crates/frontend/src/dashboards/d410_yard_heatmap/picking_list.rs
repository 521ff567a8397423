//! Picking list: the N units that should leave the yard first.

use chrono::NaiveDate;
use contracts::dashboards::d410_yard_heatmap::Slot;
use thiserror::Error;

use crate::shared::export::{export_to_excel, ExcelExportable};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickingListError {
    #[error("Enter how many units to pick")]
    Empty,
    #[error("'{0}' is not a whole number")]
    NotANumber(String),
    #[error("Quantity must be at least 1")]
    NotPositive,
    #[error("No occupied slots to export")]
    NothingToExport,
    #[error("Export failed: {0}")]
    Export(String),
}

/// Parse the quantity typed by the operator
pub fn parse_quantity(input: &str) -> Result<usize, PickingListError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(PickingListError::Empty);
    }
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PickingListError::NotANumber(text.to_string()));
    }
    if negative || digits.bytes().all(|b| b == b'0') {
        return Err(PickingListError::NotPositive);
    }
    // Only digits remain, so the parse can fail on overflow alone
    Ok(digits.parse::<usize>().unwrap_or(usize::MAX))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickingRow {
    pub seq: usize,
    pub location: String,
    pub brand: String,
    pub engine_number: String,
    pub chassis_number: String,
    pub bl_number: Option<String>,
    pub aging: u32,
}

impl ExcelExportable for PickingRow {
    fn headers() -> Vec<&'static str> {
        vec!["No", "Location", "Brand", "Engine", "Chassis", "BL", "Aging"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.seq.to_string(),
            self.location.clone(),
            self.brand.clone(),
            self.engine_number.clone(),
            self.chassis_number.clone(),
            self.bl_number.clone().unwrap_or_default(),
            self.aging.to_string(),
        ]
    }
}

/// Pick the `quantity` occupied slots with the lowest FIFO rank.
///
/// Stable sort ascending by rank, units without rank last. Filters are not
/// applied. Asking for more than there is returns everything.
pub fn select_for_picking(slots: &[Slot], quantity: usize) -> Vec<PickingRow> {
    let mut occupied: Vec<&Slot> = slots.iter().filter(|s| s.is_occupied()).collect();
    occupied.sort_by_key(|s| {
        let rank = s.active_occupant().and_then(|u| u.fifo_rank);
        (rank.is_none(), rank)
    });

    occupied
        .into_iter()
        .take(quantity)
        .filter_map(|slot| slot.active_occupant().map(|unit| (slot, unit)))
        .enumerate()
        .map(|(i, (slot, unit))| PickingRow {
            seq: i + 1,
            location: slot.key.location(),
            brand: unit.brand.clone(),
            engine_number: unit.engine_number.clone(),
            chassis_number: unit.chassis_number.clone(),
            bl_number: unit.bl_number.clone(),
            aging: unit.aging,
        })
        .collect()
}

pub fn picking_list_filename(date: NaiveDate) -> String {
    format!("Picking_List_{}.csv", date.format("%Y-%m-%d"))
}

/// Validate the quantity and build the rows; nothing is written on error
pub fn prepare_picking_list(
    slots: &[Slot],
    quantity_input: &str,
) -> Result<Vec<PickingRow>, PickingListError> {
    let quantity = parse_quantity(quantity_input)?;
    let rows = select_for_picking(slots, quantity);
    if rows.is_empty() {
        return Err(PickingListError::NothingToExport);
    }
    Ok(rows)
}

/// Validate, select and download. Returns the number of exported units.
pub fn export_picking_list(slots: &[Slot], quantity_input: &str) -> Result<usize, PickingListError> {
    let rows = prepare_picking_list(slots, quantity_input)?;
    let filename = picking_list_filename(chrono::Local::now().date_naive());
    export_to_excel(&rows, &filename).map_err(PickingListError::Export)?;
    log::info!("Exported picking list {} with {} units", filename, rows.len());
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_yard_heatmap::test_support::{empty, inactive, occupied, with_ids};
    use crate::shared::export::render_csv;

    fn locations(rows: &[PickingRow]) -> Vec<String> {
        rows.iter().map(|r| r.location.clone()).collect()
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert_eq!(parse_quantity(" 12 "), Ok(12));
        assert_eq!(parse_quantity(""), Err(PickingListError::Empty));
        assert_eq!(parse_quantity("0"), Err(PickingListError::NotPositive));
        assert_eq!(parse_quantity("-4"), Err(PickingListError::NotPositive));
        assert_eq!(
            parse_quantity("abc"),
            Err(PickingListError::NotANumber("abc".into()))
        );
        assert_eq!(
            parse_quantity("2.5"),
            Err(PickingListError::NotANumber("2.5".into()))
        );
    }

    #[test]
    fn test_lowest_ranks_first() {
        let slots: Vec<Slot> = [4, 2, 5, 1, 3]
            .iter()
            .map(|r| occupied(1, *r, Some(*r), 0))
            .collect();
        let rows = prepare_picking_list(&slots, "3").unwrap();
        assert_eq!(locations(&rows), vec!["A-1-1", "A-1-2", "A-1-3"]);
        assert_eq!(rows.iter().map(|r| r.seq).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_huge_quantity_saturates() {
        assert_eq!(parse_quantity("99999999999999999999"), Ok(usize::MAX));
        assert_eq!(parse_quantity("+7"), Ok(7));
        assert_eq!(parse_quantity("-99999999999999999999"), Err(PickingListError::NotPositive));
        assert_eq!(parse_quantity("00"), Err(PickingListError::NotPositive));

        let slots = vec![occupied(1, 1, Some(2), 0), occupied(1, 2, Some(1), 0)];
        let rows = prepare_picking_list(&slots, "99999999999999999999").unwrap();
        assert_eq!(locations(&rows), vec!["A-1-2", "A-1-1"]);
    }

    #[test]
    fn test_quantity_above_occupied_count_exports_all() {
        let slots = vec![
            occupied(1, 1, Some(2), 0),
            empty(1, 2),
            occupied(1, 3, Some(1), 0),
            inactive(1, 4),
        ];
        let rows = prepare_picking_list(&slots, "50").unwrap();
        assert_eq!(locations(&rows), vec!["A-1-3", "A-1-1"]);
    }

    #[test]
    fn test_missing_rank_sorts_last_and_ties_are_stable() {
        let slots = vec![
            occupied(1, 1, None, 0),
            occupied(1, 2, Some(3), 0),
            occupied(1, 3, None, 0),
            occupied(1, 4, Some(3), 0),
        ];
        let rows = select_for_picking(&slots, 4);
        assert_eq!(locations(&rows), vec!["A-1-2", "A-1-4", "A-1-1", "A-1-3"]);
    }

    #[test]
    fn test_invalid_quantity_produces_no_rows() {
        let slots = vec![occupied(1, 1, Some(1), 0)];
        assert_eq!(
            prepare_picking_list(&slots, "0"),
            Err(PickingListError::NotPositive)
        );
        assert!(matches!(
            export_picking_list(&slots, "x"),
            Err(PickingListError::NotANumber(_))
        ));
    }

    #[test]
    fn test_nothing_to_export() {
        assert_eq!(
            prepare_picking_list(&[empty(1, 1)], "2"),
            Err(PickingListError::NothingToExport)
        );
    }

    #[test]
    fn test_rows_render_as_spreadsheet() {
        let slots = vec![with_ids(
            occupied(2, 7, Some(1), 9),
            "Hino",
            "ENG-1",
            "CH-1",
            Some("BL-77"),
        )];
        let rows = select_for_picking(&slots, 1);
        let csv = render_csv(&rows).unwrap();
        assert_eq!(
            csv,
            "\u{FEFF}No;Location;Brand;Engine;Chassis;BL;Aging\r\n1;A-2-7;Hino;ENG-1;CH-1;BL-77;9\r\n"
        );
    }

    #[test]
    fn test_filename_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(picking_list_filename(date), "Picking_List_2026-10-18.csv");
    }
}
