use contracts::dashboards::d410_yard_heatmap::{Slot, SlotKey};
use contracts::enums::{UnitStatus, Zone};
use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

use super::detail_card::DetailCard;
use super::legend::{HeatmapLegend, SummaryStrip};
use super::zone_panel::{HeatmapContext, ZonePanel};
use crate::dashboards::d410_yard_heatmap::api;
use crate::dashboards::d410_yard_heatmap::filters::{AgingFilter, StatusFilter};
use crate::dashboards::d410_yard_heatmap::heat::{GradientVariant, RankScale};
use crate::dashboards::d410_yard_heatmap::layout::{build_layout, slots_in_display_order};
use crate::dashboards::d410_yard_heatmap::picking_list::export_picking_list;
use crate::dashboards::d410_yard_heatmap::search::SearchQuery;
use crate::dashboards::d410_yard_heatmap::state::{create_state, search_from_url};
use crate::dashboards::d410_yard_heatmap::summary::YardSummary;
use crate::shared::api_client::ApiClient;
use crate::shared::config::ClientConfig;
use crate::shared::icons::icon;
use crate::shared::poller::{spawn_polling, PollerSlot};
use crate::shared::request_sequence::RequestSequence;

/// Delay before scrolling so the highlight ring is rendered first
const SCROLL_DELAY_MS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapMode {
    Loading,
    Empty,
    Ready,
}

/// Yard slot map with FIFO heat coloring
#[component]
pub fn YardHeatmapDashboard() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient context not found");
    let config = use_context::<ClientConfig>().expect("ClientConfig context not found");

    let state = create_state(config.heatmap.gradient);

    // Snapshot of the last accepted response
    let (slots, set_slots) = signal(Vec::<Slot>::new());
    let (loading, set_loading) = signal(false);
    let (loaded, set_loaded) = signal(false);
    let (notice, set_notice) = signal(None::<String>);

    let search = RwSignal::new(search_from_url().unwrap_or_default());
    let selected = RwSignal::new(None::<SlotKey>);

    let sequence = RequestSequence::new();
    let poll_sequence = sequence.clone();
    let load = Callback::new(move |_: ()| {
        let ticket = sequence.issue();
        let sequence = sequence.clone();
        let client = client.clone();
        set_loading.set(true);

        spawn_local(async move {
            let result = api::fetch_slots(&client).await;
            if !sequence.settle(ticket) {
                log::debug!("Discarding stale slot response {:?}", ticket);
                return;
            }

            match result {
                Ok(batch) => {
                    log::info!("Loaded {} yard slots", batch.slots.len());
                    let skipped = batch.rejected.len();
                    set_notice.set((skipped > 0).then(|| {
                        format!("{} slot record(s) were invalid and are not shown", skipped)
                    }));
                    set_slots.set(batch.slots);
                }
                Err(e) => {
                    log::error!("Failed to load yard slots: {}", e);
                    set_notice.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
            set_loaded.set(true);
        });
    });

    // Load data on mount
    load.run(());

    let filters = Signal::derive(move || state.with(|s| s.filters.clone()));
    let gradient = Signal::derive(move || state.with(|s| s.gradient));
    let auto_refresh = Memo::new(move |_| state.with(|s| s.auto_refresh));

    let scale = Memo::new(move |_| slots.with(|s| RankScale::from_slots(s)));
    let layout = Memo::new(move |_| slots.with(|s| build_layout(s)));
    let summary = Memo::new(move |_| slots.with(|s| filters.with(|f| YardSummary::compute(s, f))));
    let query = Memo::new(move |_| SearchQuery::new(&search.get()));
    let matched = Memo::new(move |_| {
        query.with(|q| {
            slots.with(|s| q.matching_keys(s.iter()).into_iter().collect::<HashSet<_>>())
        })
    });

    let selected_unit = Memo::new(move |_| {
        let key = selected.get()?;
        slots.with(|s| {
            s.iter()
                .find(|slot| slot.key == key)
                .and_then(|slot| slot.active_occupant().cloned())
                .map(|unit| (key, unit))
        })
    });

    // Close the card when a reload frees the selected slot
    Effect::new(move |_| {
        if selected.get().is_some() && selected_unit.with(|u| u.is_none()) {
            selected.set(None);
        }
    });

    // Scroll to the first match in display order
    let last_scroll = StoredValue::new(None::<(SearchQuery, SlotKey)>);
    Effect::new(move |_| {
        let q = query.get();
        if !q.wants_autoscroll() {
            return;
        }
        let first = layout.with(|zones| {
            q.matching_keys(slots_in_display_order(zones))
                .into_iter()
                .next()
        });
        let Some(key) = first else {
            return;
        };

        let marker = Some((q, key));
        if last_scroll.with_value(|last| *last == marker) {
            return;
        }
        last_scroll.set_value(marker);

        spawn_local(async move {
            TimeoutFuture::new(SCROLL_DELAY_MS).await;
            scroll_to_slot(key);
        });
    });

    // Auto-refresh poller, stopped on unmount
    let poller = PollerSlot::default();
    let interval_ms = config.heatmap.poll_interval_secs.max(1).saturating_mul(1000);
    {
        let poller = poller.clone();
        Effect::new(move |_| {
            if auto_refresh.get() {
                log::info!("Auto-refresh every {} ms", interval_ms);
                let sequence = poll_sequence.clone();
                let tick = move || {
                    // Skip while the previous load is pending
                    if sequence.is_idle() {
                        load.run(());
                    } else {
                        log::debug!("Previous slot load still running, skipping refresh");
                    }
                };
                poller.replace(Some(spawn_polling(interval_ms, tick)));
            } else {
                poller.stop();
            }
        });
    }
    on_cleanup(move || poller.stop());

    // Select bindings
    let status_code = RwSignal::new(state.with_untracked(|s| s.filters.status.code()));
    Effect::new(move |_| {
        let next = StatusFilter::from_code(&status_code.get());
        if state.with_untracked(|s| s.filters.status != next) {
            state.update(|s| s.filters.status = next);
        }
    });

    let gradient_code = RwSignal::new(state.with_untracked(|s| s.gradient.code().to_string()));
    Effect::new(move |_| {
        let Some(next) = GradientVariant::from_code(&gradient_code.get()) else {
            return;
        };
        if state.with_untracked(|s| s.gradient != next) {
            state.update(|s| s.gradient = next);
        }
    });

    let set_aging = move |aging: AgingFilter| state.update(|s| s.filters.aging = aging);

    let toggle_auto_refresh = move |_: MouseEvent| {
        state.update(|s| s.auto_refresh = !s.auto_refresh);
    };

    // Picking list export
    let pick_qty = RwSignal::new(String::new());
    let (export_result, set_export_result) = signal(None::<Result<String, String>>);
    let on_export = move |_: MouseEvent| {
        let result = slots.with_untracked(|s| export_picking_list(s, &pick_qty.get_untracked()));
        set_export_result.set(Some(match result {
            Ok(count) => Ok(format!("Exported {} unit(s)", count)),
            Err(e) => {
                log::warn!("Picking list not exported: {}", e);
                Err(e.to_string())
            }
        }));
    };

    let ctx = HeatmapContext {
        scale,
        filters,
        gradient,
        matched,
        selected,
    };

    let mode = Memo::new(move |_| {
        if !loaded.get() {
            MapMode::Loading
        } else if slots.with(|s| s.is_empty()) {
            MapMode::Empty
        } else {
            MapMode::Ready
        }
    });

    let zone_panel = move |zone: Zone| {
        move || {
            layout
                .with(|zones| zones.iter().find(|z| z.zone == zone).cloned())
                .map(|z| view! { <ZonePanel zone=z ctx=ctx /> })
        }
    };

    let aging_pills = AgingFilter::all()
        .into_iter()
        .map(|aging| {
            let is_active = move || filters.with(|f| f.aging == aging);
            view! {
                <button
                    class="heatmap-pill"
                    class:heatmap-pill--active=is_active
                    on:click=move |_| set_aging(aging)
                >
                    {aging.label()}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let status_options = UnitStatus::filterable()
        .into_iter()
        .map(|status| {
            let code = status.code().to_string();
            view! { <option value=code>{status.to_string()}</option> }
        })
        .collect::<Vec<_>>();

    let gradient_options = GradientVariant::all()
        .into_iter()
        .map(|g| view! { <option value=g.code()>{g.label()}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="page page--wide yard-heatmap">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("map")}
                    <h1 class="page__title">"Yard Slot Map"</h1>
                    <HeatmapLegend gradient=gradient />
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load.run(())
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Reload" }}
                    </Button>
                    <button
                        class="heatmap-pill"
                        class:heatmap-pill--active=move || auto_refresh.get()
                        on:click=toggle_auto_refresh
                    >
                        {icon("clock")}
                        " Auto-refresh"
                    </button>
                </div>
            </div>

            <SummaryStrip summary=summary />

            <div class="yard-heatmap__toolbar">
                <div class="yard-heatmap__search">
                    {icon("search")}
                    <Input value=search placeholder="Search engine, chassis, BL or brand..." />
                    {move || {
                        (!query.with(|q| q.is_empty())).then(|| {
                            let count = matched.with(|m| m.len());
                            if count == 0 {
                                view! { <span class="yard-heatmap__hint">"No matches"</span> }.into_any()
                            } else {
                                view! { <Badge>{format!("{} found", count)}</Badge> }.into_any()
                            }
                        })
                    }}
                </div>

                <div class="yard-heatmap__filters">
                    {icon("filter")}
                    <span class="yard-heatmap__label">"Aging"</span>
                    {aging_pills}
                    <span class="yard-heatmap__label">"Status"</span>
                    <Select value=status_code>
                        <option value="ALL">"All statuses"</option>
                        {status_options}
                    </Select>
                    <span class="yard-heatmap__label">"Gradient"</span>
                    <Select value=gradient_code>{gradient_options}</Select>
                </div>

                <div class="yard-heatmap__export">
                    <Input value=pick_qty placeholder="Qty" />
                    <Button appearance=ButtonAppearance::Primary on_click=on_export>
                        {icon("download")}
                        " Picking List"
                    </Button>
                    {move || {
                        export_result.get().map(|result| match result {
                            Ok(msg) => view! { <span class="yard-heatmap__ok">{msg}</span> }.into_any(),
                            Err(msg) => view! { <span class="yard-heatmap__error">{msg}</span> }.into_any(),
                        })
                    }}
                </div>
            </div>

            {move || {
                notice.get().map(|msg| {
                    view! {
                        <div class="warning-box">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{msg}</span>
                            <button class="warning-box__close" on:click=move |_| set_notice.set(None)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                })
            }}

            {move || match mode.get() {
                MapMode::Loading => view! {
                    <div class="yard-heatmap__placeholder">"Loading yard map..."</div>
                }
                .into_any(),
                MapMode::Empty => view! {
                    <div class="yard-heatmap__placeholder">"No slots configured for this yard"</div>
                }
                .into_any(),
                MapMode::Ready => view! {
                    <div class="yard-heatmap__map">
                        <div class="yard-heatmap__west">{zone_panel(Zone::E)}</div>
                        <div class="yard-heatmap__east">
                            {zone_panel(Zone::D)}
                            {zone_panel(Zone::C)}
                            <div class="yard-heatmap__road">
                                <span>"Logistics Access Road"</span>
                            </div>
                            {zone_panel(Zone::B)}
                            {zone_panel(Zone::A)}
                        </div>
                    </div>
                }
                .into_any(),
            }}

            <DetailCard
                selected=selected_unit
                on_close=Callback::new(move |_| selected.set(None))
            />
        </div>
    }
}

fn scroll_to_slot(key: SlotKey) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(&key.dom_id()))
    else {
        log::debug!("Slot {} is not rendered, skipping scroll", key.location());
        return;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Center);
    options.set_inline(web_sys::ScrollLogicalPosition::Center);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
