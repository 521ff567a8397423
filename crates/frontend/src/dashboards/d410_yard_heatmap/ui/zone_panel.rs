use contracts::dashboards::d410_yard_heatmap::{Slot, SlotKey};
use leptos::prelude::*;
use std::collections::HashSet;

use crate::dashboards::d410_yard_heatmap::filters::HeatFilters;
use crate::dashboards::d410_yard_heatmap::heat::{paint_slot, GradientVariant, RankScale};
use crate::dashboards::d410_yard_heatmap::layout::ZoneLayout;

/// Reactive inputs every slot cell reads
#[derive(Clone, Copy)]
pub struct HeatmapContext {
    pub scale: Memo<RankScale>,
    pub filters: Signal<HeatFilters>,
    pub gradient: Signal<GradientVariant>,
    pub matched: Memo<HashSet<SlotKey>>,
    pub selected: RwSignal<Option<SlotKey>>,
}

#[component]
pub fn ZonePanel(zone: ZoneLayout, ctx: HeatmapContext) -> impl IntoView {
    let accent_class = if zone.zone.is_pdi_area() {
        "zone-panel__accent zone-panel__accent--pdi"
    } else {
        "zone-panel__accent"
    };
    let title = zone.zone.display_name();

    let rows = zone
        .rows
        .into_iter()
        .map(|row| {
            let cells = row
                .slots
                .into_iter()
                .map(|cell| view! { <SlotCell cell=cell ctx=ctx /> })
                .collect::<Vec<_>>();
            view! {
                <div class="zone-panel__row">
                    <span class="zone-panel__row-label">{format!("R{}", row.row)}</span>
                    {cells}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="zone-panel">
            <div class="zone-panel__header">
                <div class=accent_class></div>
                <span class="zone-panel__title">{title}</span>
            </div>
            <div class="zone-panel__grid">{rows}</div>
        </div>
    }
}

#[component]
fn SlotCell(cell: Slot, ctx: HeatmapContext) -> impl IntoView {
    let key = cell.key;
    let selectable = cell.is_selectable();
    let tooltip = cell
        .active_occupant()
        .map(|unit| format!("{} · {}", key.location(), unit.engine_number))
        .unwrap_or_else(|| key.location());

    let is_matched = move || ctx.matched.with(|m| m.contains(&key));
    let is_selected = move || ctx.selected.get() == Some(key);

    let style = move || {
        let paint = ctx
            .filters
            .with(|filters| paint_slot(&cell, &ctx.scale.get(), filters));
        format!("background-color: {};", paint.css_color(ctx.gradient.get()))
    };

    let on_click = move |_| {
        // Free and inactive slots have nothing to show
        if selectable {
            ctx.selected.set(Some(key));
        }
    };

    view! {
        <div
            id=key.dom_id()
            class="yard-slot"
            class:yard-slot--selectable=selectable
            class:yard-slot--matched=is_matched
            class:yard-slot--selected=is_selected
            style=style
            title=tooltip
            on:click=on_click
        >
            {move || is_matched().then(|| view! { <div class="yard-slot__pulse"></div> })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_yard_heatmap::layout::build_layout;
    use crate::dashboards::d410_yard_heatmap::test_support::{empty, inactive, occupied};

    #[test]
    fn test_zone_panel_view_builds_for_every_slot_kind() {
        let owner = Owner::new();
        owner.with(|| {
            let slots = vec![occupied(1, 1, Some(1), 3), empty(1, 2), inactive(1, 3)];
            let zone = build_layout(&slots).remove(0);
            assert_eq!(zone.slots().count(), 3);

            let ctx = HeatmapContext {
                scale: Memo::new(|_| RankScale::default()),
                filters: Signal::derive(HeatFilters::default),
                gradient: Signal::derive(|| GradientVariant::RedWhite),
                matched: Memo::new(|_| HashSet::new()),
                selected: RwSignal::new(None),
            };
            let _panel = view! { <ZonePanel zone=zone ctx=ctx /> };
        });
    }
}
