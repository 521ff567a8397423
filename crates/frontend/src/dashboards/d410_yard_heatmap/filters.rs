use contracts::dashboards::d410_yard_heatmap::UnitSummary;
use contracts::enums::UnitStatus;

/// Aging presets offered as pills. A preset hides (de-emphasizes) units
/// that have been in the yard for at most that many days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgingFilter {
    #[default]
    Off,
    Over3,
    Over7,
    Over14,
}

impl AgingFilter {
    pub fn all() -> [AgingFilter; 4] {
        [
            AgingFilter::Off,
            AgingFilter::Over3,
            AgingFilter::Over7,
            AgingFilter::Over14,
        ]
    }

    pub fn threshold_days(&self) -> u32 {
        match self {
            AgingFilter::Off => 0,
            AgingFilter::Over3 => 3,
            AgingFilter::Over7 => 7,
            AgingFilter::Over14 => 14,
        }
    }

    pub fn label(&self) -> String {
        match self {
            AgingFilter::Off => "ALL".to_string(),
            other => format!(">{}D", other.threshold_days()),
        }
    }

    pub fn excludes(&self, aging: u32) -> bool {
        let threshold = self.threshold_days();
        threshold > 0 && aging <= threshold
    }
}

/// Status filter; `All` passes every unit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(UnitStatus),
}

impl StatusFilter {
    /// Value used by the `<select>`
    pub fn code(&self) -> String {
        match self {
            StatusFilter::All => "ALL".to_string(),
            StatusFilter::Only(status) => status.code().to_string(),
        }
    }

    pub fn from_code(code: &str) -> Self {
        if code.trim().is_empty() || code.trim().eq_ignore_ascii_case("ALL") {
            StatusFilter::All
        } else {
            StatusFilter::Only(UnitStatus::from_code(code))
        }
    }

    pub fn excludes(&self, status: &UnitStatus) -> bool {
        match self {
            StatusFilter::All => false,
            StatusFilter::Only(wanted) => wanted != status,
        }
    }
}

/// Both filters together
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeatFilters {
    pub aging: AgingFilter,
    pub status: StatusFilter,
}

impl HeatFilters {
    /// True if the unit should be drawn in the "filtered out" color
    pub fn excludes(&self, unit: &UnitSummary) -> bool {
        self.aging.excludes(unit.aging) || self.status.excludes(&unit.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aging_threshold_is_inclusive() {
        assert!(!AgingFilter::Off.excludes(0));
        assert!(AgingFilter::Over3.excludes(3));
        assert!(!AgingFilter::Over3.excludes(4));
        assert!(AgingFilter::Over14.excludes(0));
        assert_eq!(AgingFilter::Over7.label(), ">7D");
        assert_eq!(AgingFilter::Off.label(), "ALL");
    }

    #[test]
    fn test_status_filter_codes() {
        assert_eq!(StatusFilter::from_code("ALL"), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_code("READY"),
            StatusFilter::Only(UnitStatus::Ready)
        );
        assert_eq!(StatusFilter::Only(UnitStatus::Repair).code(), "REPAIR");
        assert!(StatusFilter::Only(UnitStatus::Ready).excludes(&UnitStatus::Repair));
        assert!(!StatusFilter::All.excludes(&UnitStatus::Repair));
    }

    #[test]
    fn test_filters_compose_with_or() {
        let filters = HeatFilters {
            aging: AgingFilter::Over3,
            status: StatusFilter::Only(UnitStatus::Ready),
        };
        let mut unit = crate::dashboards::d410_yard_heatmap::test_support::unit(Some(1), 10);
        unit.status = UnitStatus::Ready;
        assert!(!filters.excludes(&unit));
        unit.aging = 2;
        assert!(filters.excludes(&unit));
        unit.aging = 10;
        unit.status = UnitStatus::Incoming;
        assert!(filters.excludes(&unit));
    }
}
