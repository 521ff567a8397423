use contracts::dashboards::d410_yard_heatmap::Slot;

use super::filters::HeatFilters;

/// Counters shown in the header strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YardSummary {
    pub total: usize,
    pub active: usize,
    pub occupied: usize,
    pub free: usize,
    /// Occupied slots drawn in the filtered color
    pub filtered_out: usize,
}

impl YardSummary {
    pub fn compute(slots: &[Slot], filters: &HeatFilters) -> Self {
        let mut summary = YardSummary {
            total: slots.len(),
            ..Default::default()
        };
        for slot in slots.iter().filter(|s| s.is_active) {
            summary.active += 1;
            match slot.active_occupant() {
                Some(unit) => {
                    summary.occupied += 1;
                    if filters.excludes(unit) {
                        summary.filtered_out += 1;
                    }
                }
                None => summary.free += 1,
            }
        }
        summary
    }

    /// Occupied share of active slots, whole percent
    pub fn utilization_percent(&self) -> u32 {
        if self.active == 0 {
            return 0;
        }
        ((self.occupied as f64 / self.active as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_yard_heatmap::filters::AgingFilter;
    use crate::dashboards::d410_yard_heatmap::test_support::{empty, inactive, occupied};

    #[test]
    fn test_counts() {
        let slots = vec![
            occupied(1, 1, Some(1), 2),
            occupied(1, 2, Some(2), 20),
            empty(1, 3),
            inactive(1, 4),
        ];
        let filters = HeatFilters {
            aging: AgingFilter::Over3,
            ..Default::default()
        };
        let summary = YardSummary::compute(&slots, &filters);
        assert_eq!(
            summary,
            YardSummary {
                total: 4,
                active: 3,
                occupied: 2,
                free: 1,
                filtered_out: 1,
            }
        );
        assert_eq!(summary.utilization_percent(), 67);
    }

    #[test]
    fn test_no_active_slots() {
        let summary = YardSummary::compute(&[inactive(1, 1)], &HeatFilters::default());
        assert_eq!(summary.utilization_percent(), 0);
    }
}
