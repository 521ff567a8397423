use contracts::dashboards::d410_yard_heatmap::{Slot, SlotKey, UnitSummary};

/// Shortest term that moves the viewport to the first match
pub const AUTOSCROLL_MIN_CHARS: usize = 3;

/// Normalized free-text search over the identification fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn wants_autoscroll(&self) -> bool {
        self.needle.chars().count() >= AUTOSCROLL_MIN_CHARS
    }

    /// Case-insensitive substring match on engine, chassis, BL and brand.
    /// An empty query matches nothing.
    pub fn matches_unit(&self, unit: &UnitSummary) -> bool {
        if self.is_empty() {
            return false;
        }
        let hit = |field: &str| field.to_lowercase().contains(&self.needle);
        hit(unit.engine_number.as_str())
            || hit(unit.chassis_number.as_str())
            || unit.bl_number.as_deref().is_some_and(hit)
            || hit(unit.brand.as_str())
    }

    /// Only occupied active slots can match
    pub fn matches(&self, slot: &Slot) -> bool {
        slot.active_occupant()
            .is_some_and(|unit| self.matches_unit(unit))
    }

    /// Keys of all matching slots, in the order given
    pub fn matching_keys<'a, I>(&self, slots: I) -> Vec<SlotKey>
    where
        I: IntoIterator<Item = &'a Slot>,
    {
        if self.is_empty() {
            return Vec::new();
        }
        slots
            .into_iter()
            .filter(|s| self.matches(s))
            .map(|s| s.key)
            .collect()
    }
}
