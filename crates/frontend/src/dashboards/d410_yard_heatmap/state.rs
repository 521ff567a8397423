use leptos::prelude::*;
use std::collections::HashMap;

use super::filters::HeatFilters;
use super::heat::GradientVariant;

/// View settings of the heatmap page. Lives only as long as the page;
/// nothing here is written to browser storage.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapViewState {
    pub filters: HeatFilters,
    pub gradient: GradientVariant,
    pub auto_refresh: bool,
}

impl HeatmapViewState {
    pub fn with_gradient(gradient: GradientVariant) -> Self {
        Self {
            filters: HeatFilters::default(),
            gradient,
            auto_refresh: false,
        }
    }
}

/// Fresh view state, `default_gradient` from config
pub fn create_state(default_gradient: GradientVariant) -> RwSignal<HeatmapViewState> {
    RwSignal::new(HeatmapViewState::with_gradient(default_gradient))
}

/// Search term from the page URL (`?q=ENG123`), used for deep links
pub fn search_from_url() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    search_from_query(&search)
}

fn search_from_query(query: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();
    params
        .get("q")
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_yard_heatmap::filters::{AgingFilter, StatusFilter};

    #[test]
    fn test_search_from_query() {
        assert_eq!(search_from_query("?q=ENG-44"), Some("ENG-44".to_string()));
        assert_eq!(search_from_query("q=hino%20300&x=1"), Some("hino 300".to_string()));
        assert_eq!(search_from_query("?q="), None);
        assert_eq!(search_from_query(""), None);
    }

    #[test]
    fn test_new_state_starts_unfiltered() {
        let owner = Owner::new();
        owner.with(|| {
            let state = create_state(GradientVariant::RedBlack);
            let st = state.get_untracked();
            assert_eq!(st.filters.aging, AgingFilter::Off);
            assert_eq!(st.filters.status, StatusFilter::All);
            assert_eq!(st.gradient, GradientVariant::RedBlack);
            assert!(!st.auto_refresh);
        });
    }
}
