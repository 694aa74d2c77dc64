use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::leads::{submit_lead, LeadField};
use crate::view_state::{LeadFormAction, LeadFormState, Notice};

const NOTICE_TIMEOUT_MS: u32 = 6_000;

fn field_input(
    form: &UseReducerHandle<LeadFormState>,
    field: LeadField,
    name: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> Html {
    let oninput = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(LeadFormAction::Edit(field, input.value()));
        })
    };

    html! {
        <input
            type={input_type}
            {name}
            {placeholder}
            value={form.lead.get(field).to_string()}
            {oninput}
        />
    }
}

#[function_component(LeadForm)]
pub fn lead_form() -> Html {
    let form = use_reducer(LeadFormState::default);

    {
        let form = form.clone();
        let notice = form.notice;
        use_effect_with_deps(
            move |notice: &Option<Notice>| {
                let timeout = notice.map(|_| {
                    Timeout::new(NOTICE_TIMEOUT_MS, move || {
                        form.dispatch(LeadFormAction::DismissNotice)
                    })
                });
                move || drop(timeout)
            },
            notice,
        );
    }

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.submitting {
                return;
            }
            let lead = form.lead.clone();
            form.dispatch(LeadFormAction::Submit);

            let form = form.clone();
            spawn_local(async move {
                match submit_lead(&lead).await {
                    Ok(()) => {
                        info!("Lead stored");
                        form.dispatch(LeadFormAction::Submitted(true));
                    }
                    Err(e) => {
                        error!("Failed to store lead: {}", e);
                        form.dispatch(LeadFormAction::Submitted(false));
                    }
                }
            });
        })
    };

    html! {
        <div class="lead-form-card">
            <h4>{"Comienza Ahora"}</h4>
            <form {onsubmit}>
                {field_input(&form, LeadField::FirstName, "nombre", "text", "Nombre")}
                {field_input(&form, LeadField::LastName, "apellido", "text", "Apellido")}
                {field_input(&form, LeadField::Email, "correo", "email", "Correo")}
                {field_input(&form, LeadField::Phone, "telefono", "tel", "Teléfono")}
                <div class="lead-terms">
                    <input type="checkbox" id="terms" />
                    <label for="terms">
                        {"Acepto los "}<a href="#">{"Términos y condiciones"}</a>{"."}
                    </label>
                </div>
                <button type="submit" disabled={form.submitting}>
                    { if form.submitting { "Enviando..." } else { "Recibir demo" } }
                </button>
            </form>
            if let Some(notice) = form.notice {
                <div class={classes!("lead-notice", (notice == Notice::RetryLater).then(|| "error"))}>
                    {notice.message()}
                </div>
            }
        </div>
    }
}
