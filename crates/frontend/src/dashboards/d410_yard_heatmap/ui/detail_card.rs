use contracts::dashboards::d410_yard_heatmap::{SlotKey, UnitSummary};
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Floating card with the occupant of the selected slot
#[component]
pub fn DetailCard(
    #[prop(into)] selected: Signal<Option<(SlotKey, UnitSummary)>>,
    on_close: Callback<()>,
) -> impl IntoView {
    move || {
        selected.get().map(|(key, unit)| {
            let rank = unit
                .fifo_rank
                .map(|r| format!("#{}", r))
                .unwrap_or_else(|| "—".to_string());
            let bl = unit.bl_number.clone().unwrap_or_else(|| "—".to_string());

            view! {
                <div class="detail-card">
                    <div class="detail-card__head">
                        <button class="detail-card__close" on:click=move |_| on_close.run(())>
                            {icon("x")}
                        </button>
                        <span class="detail-card__brand">{unit.brand.clone()}</span>
                        <h3 class="detail-card__title">{unit.engine_number.clone()}</h3>
                        <span class="detail-card__location">{key.location()}</span>
                    </div>
                    <div class="detail-card__body">
                        <div class="detail-card__grid">
                            <div class="detail-card__cell">
                                <p class="detail-card__label">"Aging"</p>
                                <p class="detail-card__value detail-card__value--hot">
                                    {format!("{} Days", unit.aging)}
                                </p>
                            </div>
                            <div class="detail-card__cell">
                                <p class="detail-card__label">"FIFO Rank"</p>
                                <p class="detail-card__value">{rank}</p>
                            </div>
                        </div>
                        <dl class="detail-card__fields">
                            <dt>"Chassis"</dt>
                            <dd>{unit.chassis_number.clone()}</dd>
                            <dt>"BL"</dt>
                            <dd>{bl}</dd>
                        </dl>
                        <div class="detail-card__status">
                            {icon("check")}
                            <span>{unit.status.to_string()}</span>
                        </div>
                    </div>
                </div>
            }
        })
    }
}
