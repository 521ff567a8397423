//! Heat color derivation.
//!
//! Occupied slots are colored along a two-color gradient by their FIFO rank
//! relative to the other occupied slots: oldest (lowest rank) at the red end,
//! newest at the light or dark end.
//!
//! The rank scale always spans every occupied active slot in the snapshot,
//! not just the ones passing the current filters, so toggling a filter never
//! recolors the slots that stay visible.

use contracts::dashboards::d410_yard_heatmap::Slot;
use serde::Deserialize;

use super::filters::HeatFilters;

pub const INACTIVE_COLOR: &str = "#F8FAFC";
pub const EMPTY_COLOR: &str = "#E2E8F0";
pub const FILTERED_COLOR: &str = "#CBD5E1";

/// Red channel of the hot end (rose-500)
const HEAT_RED: u8 = 239;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientVariant {
    /// Oldest red, newest white
    #[default]
    RedWhite,
    /// Oldest red, newest black
    RedBlack,
}

impl GradientVariant {
    pub fn all() -> [GradientVariant; 2] {
        [GradientVariant::RedWhite, GradientVariant::RedBlack]
    }

    /// Value used by the `<select>`, same spelling as in the config file
    pub fn code(&self) -> &'static str {
        match self {
            GradientVariant::RedWhite => "red-white",
            GradientVariant::RedBlack => "red-black",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.code() == code.trim())
    }

    pub fn label(&self) -> &'static str {
        match self {
            GradientVariant::RedWhite => "Red → White",
            GradientVariant::RedBlack => "Red → Black",
        }
    }

    /// Newest-end swatch for the legend
    pub fn newest_color(&self) -> String {
        self.color_at(1.0)
    }

    /// Gradient color at `ratio` (0 = oldest, 1 = newest), clamped to 0..=1
    pub fn color_at(&self, ratio: f64) -> String {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        match self {
            GradientVariant::RedWhite => {
                let gb = (255.0 * ratio).floor() as u8;
                format!("rgb({},{},{})", HEAT_RED, gb, gb)
            }
            GradientVariant::RedBlack => {
                let red = (f64::from(HEAT_RED) * (1.0 - ratio)).round() as u8;
                format!("rgb({},0,0)", red)
            }
        }
    }
}

/// Min/max FIFO rank over the occupied slots of a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankScale {
    bounds: Option<(u32, u32)>,
}

impl RankScale {
    pub fn from_slots(slots: &[Slot]) -> Self {
        let bounds = slots
            .iter()
            .filter_map(|s| s.active_occupant().and_then(|u| u.fifo_rank))
            .fold(None, |acc: Option<(u32, u32)>, rank| match acc {
                None => Some((rank, rank)),
                Some((min, max)) => Some((min.min(rank), max.max(rank))),
            });
        Self { bounds }
    }

    /// Position of `rank` on the scale, 0.0 (oldest) to 1.0 (newest).
    ///
    /// A unit without rank sits at the newest end. A scale with a single
    /// distinct rank maps that rank to 0.0.
    pub fn ratio(&self, rank: Option<u32>) -> f64 {
        let Some(rank) = rank else { return 1.0 };
        match self.bounds {
            Some((min, max)) if max > min => {
                let ratio = f64::from(rank.saturating_sub(min)) / f64::from(max - min);
                ratio.clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}

/// Visual state of one slot cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotPaint {
    Inactive,
    Empty,
    Filtered,
    Heat(f64),
}

impl SlotPaint {
    pub fn css_color(&self, variant: GradientVariant) -> String {
        match self {
            SlotPaint::Inactive => INACTIVE_COLOR.to_string(),
            SlotPaint::Empty => EMPTY_COLOR.to_string(),
            SlotPaint::Filtered => FILTERED_COLOR.to_string(),
            SlotPaint::Heat(ratio) => variant.color_at(*ratio),
        }
    }
}

pub fn paint_slot(slot: &Slot, scale: &RankScale, filters: &HeatFilters) -> SlotPaint {
    if !slot.is_active {
        return SlotPaint::Inactive;
    }
    match slot.active_occupant() {
        None => SlotPaint::Empty,
        Some(unit) if filters.excludes(unit) => SlotPaint::Filtered,
        Some(unit) => SlotPaint::Heat(scale.ratio(unit.fifo_rank)),
    }
}
