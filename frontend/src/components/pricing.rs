use log::info;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::plans::api::load_resolved_tiers;
use crate::plans::catalog::Recurrence;
use crate::plans::merge::ResolvedTier;
use crate::view_state::{
    badge_label, checkout_link, cta_label, default_selection, format_price, is_highlighted,
};

#[derive(Properties, PartialEq)]
pub struct RecurrenceSelectorProps {
    pub selected: Recurrence,
    pub on_select: Callback<Recurrence>,
}

#[function_component(RecurrenceSelector)]
pub fn recurrence_selector(props: &RecurrenceSelectorProps) -> Html {
    html! {
        <div class="recurrence-selector">
            {
                for Recurrence::ALL.iter().map(|&recurrence| {
                    let on_select = props.on_select.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(recurrence));
                    html! {
                        <button
                            key={recurrence.wire_name()}
                            class={classes!("recurrence-option", (recurrence == props.selected).then(|| "active"))}
                            {onclick}
                        >
                            {recurrence.label()}
                        </button>
                    }
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TierCardProps {
    pub tier: ResolvedTier,
    pub recurrence: Recurrence,
    pub highlighted: bool,
    pub on_select: Callback<String>,
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Sí" } else { "No" }
}

#[function_component(TierCard)]
pub fn tier_card(props: &TierCardProps) -> Html {
    let tier = props.tier.tier;
    let pair = props.tier.pair(props.recurrence);

    let onclick = {
        let on_select = props.on_select.clone();
        let name = tier.name.to_string();
        Callback::from(move |_: MouseEvent| on_select.emit(name.clone()))
    };

    // an unselected card's link only selects it
    let on_cta = {
        let on_select = props.on_select.clone();
        let name = tier.name.to_string();
        let highlighted = props.highlighted;
        Callback::from(move |e: MouseEvent| {
            if !highlighted {
                e.prevent_default();
                on_select.emit(name.clone());
            }
        })
    };

    html! {
        <div
            class={classes!("tier-card", props.highlighted.then(|| "highlighted"))}
            style={format!("background: {};", tier.color)}
            {onclick}
        >
            if props.highlighted {
                <div class="tier-badge">{badge_label(&props.tier)}</div>
            }
            <h3>{tier.name}</h3>
            <div class="tier-price">{format_price(&pair.price, props.recurrence)}</div>
            <ul class="tier-features">
                <li>{"👥 Usuarios: "}<strong>{tier.users.to_string()}</strong></li>
                <li>{"🏊 Piscinas: "}<strong>{tier.sites.to_string()}</strong></li>
                <li>{"⚙️ Equipos: "}<strong>{yes_no(tier.equipment)}</strong></li>
                <li>{"📜 Normas: "}<strong>{tier.standards.to_string()}</strong></li>
                <li>{"🛠️ Normas personalizadas: "}<strong>{yes_no(tier.custom_standards)}</strong></li>
                <li>{"📩 Soporte: "}<strong>{tier.support}</strong></li>
                <li>{"💾 Almacenamiento: "}<strong>{tier.storage}</strong></li>
            </ul>
            <a
                href={checkout_link(&pair.id)}
                class={classes!("tier-cta", (!props.highlighted).then(|| "muted"))}
                onclick={on_cta}
            >
                {cta_label(&pair.price)}
            </a>
        </div>
    }
}

/// Pricing table. Loads remote prices once on mount; until then a
/// placeholder is shown.
#[function_component(Pricing)]
pub fn pricing() -> Html {
    let tiers = use_state(Vec::<ResolvedTier>::new);
    let selected = use_state(|| None::<String>);
    let recurrence = use_state(Recurrence::default);

    {
        let tiers = tiers.clone();
        let selected = selected.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let resolved = load_resolved_tiers().await;
                    info!("Resolved {} pricing tiers", resolved.len());
                    selected.set(default_selection(&resolved));
                    tiers.set(resolved);
                });
                || ()
            },
            (),
        );
    }

    let on_recurrence = {
        let recurrence = recurrence.clone();
        Callback::from(move |r: Recurrence| recurrence.set(r))
    };

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |name: String| selected.set(Some(name)))
    };

    html! {
        <section id="planes" class="pricing-section">
            <h2>{"Planes"}</h2>
            <p class="pricing-subtitle">{"Elige el plan que mejor se adapte a las necesidades de tu empresa"}</p>
            <RecurrenceSelector selected={*recurrence} on_select={on_recurrence} />
            <div class="tier-grid">
                {
                    if tiers.is_empty() {
                        html! {
                            <div class="tier-loading">
                                <p>{"Cargando planes..."}</p>
                            </div>
                        }
                    } else {
                        tiers.iter().map(|tier| {
                            html! {
                                <TierCard
                                    key={tier.name()}
                                    tier={tier.clone()}
                                    recurrence={*recurrence}
                                    highlighted={is_highlighted(tier.name(), selected.as_deref())}
                                    on_select={on_select.clone()}
                                />
                            }
                        }).collect::<Html>()
                    }
                }
            </div>
        </section>
    }
}
