//! Display helpers and the lead form's state machine. Everything here is
//! plain data so the components stay thin.

use std::rc::Rc;

use yew::functional::Reducible;

use crate::config;
use crate::leads::{Lead, LeadField};
use crate::plans::catalog::{Recurrence, DEFAULT_TIER};
use crate::plans::merge::{Price, ResolvedTier};

/// Formats a number the way `es-CO` does: `.` groups thousands, `,` marks
/// decimals, at most three fraction digits.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = format!("{:.3}", amount.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let mut out = String::new();
    if negative && (whole != "0" || !fraction.is_empty()) {
        out.push('-');
    }
    out.push_str(&grouped);
    if !fraction.is_empty() {
        out.push(',');
        out.push_str(fraction);
    }
    out
}

pub fn format_price(price: &Price, recurrence: Recurrence) -> String {
    match price {
        Price::Amount(amount) => format!("${}{}", format_amount(*amount), recurrence.unit_suffix()),
        Price::Label(label) => label.clone(),
    }
}

/// Selection applied once tiers have loaded.
pub fn default_selection(tiers: &[ResolvedTier]) -> Option<String> {
    tiers
        .iter()
        .find(|t| t.name() == DEFAULT_TIER)
        .map(|t| t.name().to_string())
}

/// Whether a card is drawn raised with a badge. Before the user picks
/// anything the default tier is highlighted.
pub fn is_highlighted(tier_name: &str, selected: Option<&str>) -> bool {
    match selected {
        Some(name) => name == tier_name,
        None => tier_name == DEFAULT_TIER,
    }
}

pub fn badge_label(tier: &ResolvedTier) -> &'static str {
    if tier.tier.featured {
        "Más popular"
    } else {
        "Seleccionado"
    }
}

pub fn cta_label(price: &Price) -> &'static str {
    if price.is_free() {
        "Comenzar gratis"
    } else {
        "Adquirir este plan"
    }
}

pub fn checkout_link(plan_id: &str) -> String {
    format!(
        "{}/?plan={}",
        config::get_checkout_url().trim_end_matches('/'),
        urlencoding::encode(plan_id)
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Notice {
    Thanks,
    RetryLater,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Thanks => "¡Gracias! Nos pondremos en contacto pronto.",
            Notice::RetryLater => "Hubo un error, inténtalo más tarde.",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadFormState {
    pub lead: Lead,
    pub submitting: bool,
    pub notice: Option<Notice>,
}

pub enum LeadFormAction {
    Edit(LeadField, String),
    Submit,
    Submitted(bool),
    DismissNotice,
}

impl Reducible for LeadFormState {
    type Action = LeadFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LeadFormAction::Edit(field, value) => next.lead.set(field, value),
            LeadFormAction::Submit => {
                if self.submitting {
                    return self;
                }
                next.submitting = true;
                next.notice = None;
            }
            LeadFormAction::Submitted(ok) => {
                next.submitting = false;
                if ok {
                    next.lead = Lead::default();
                    next.notice = Some(Notice::Thanks);
                } else {
                    next.notice = Some(Notice::RetryLater);
                }
            }
            LeadFormAction::DismissNotice => next.notice = None,
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plans::merge::merge_plans;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(&Price::Amount(59.0), Recurrence::Monthly), "$59/mes");
        assert_eq!(format_price(&Price::Amount(153.0), Recurrence::Quarterly), "$153/trim");
        assert_eq!(format_price(&Price::Amount(1234.5), Recurrence::Annual), "$1.234,5/año");
        assert_eq!(format_price(&Price::Amount(0.0), Recurrence::Semiannual), "$0/sem");
        assert_eq!(
            format_price(&Price::Label("Consultar".into()), Recurrence::Monthly),
            "Consultar"
        );
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1_000_000.0), "1.000.000");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(45.8), "45,8");
        assert_eq!(format_amount(0.12345), "0,123");
        assert_eq!(format_amount(-1500.0), "-1.500");
    }

    #[test]
    fn test_default_selection() {
        let tiers = merge_plans(None);
        assert_eq!(default_selection(&tiers), Some("Advanced".to_string()));
        assert_eq!(default_selection(&[]), None);
    }

    #[test]
    fn test_highlight_and_labels() {
        assert!(is_highlighted("Advanced", None));
        assert!(!is_highlighted("Basic", None));
        assert!(is_highlighted("Basic", Some("Basic")));
        assert!(!is_highlighted("Advanced", Some("Basic")));

        let tiers = merge_plans(None);
        assert_eq!(badge_label(&tiers[2]), "Más popular");
        assert_eq!(badge_label(&tiers[1]), "Seleccionado");

        assert_eq!(cta_label(&tiers[0].pair(Recurrence::Monthly).price), "Comenzar gratis");
        assert_eq!(cta_label(&tiers[3].pair(Recurrence::Annual).price), "Adquirir este plan");
        assert_eq!(cta_label(&tiers[4].pair(Recurrence::Annual).price), "Adquirir este plan");
    }

    #[test]
    fn test_checkout_link_encodes_id() {
        assert!(checkout_link("fallback-id-2").ends_with("/?plan=fallback-id-2"));
        assert!(checkout_link("a b").ends_with("/?plan=a%20b"));
    }

    fn reduce(state: LeadFormState, action: LeadFormAction) -> LeadFormState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_successful_submit_clears_form() {
        let state = reduce(LeadFormState::default(), LeadFormAction::Edit(LeadField::FirstName, "Ana".into()));
        let state = reduce(state, LeadFormAction::Submit);
        assert!(state.submitting);
        assert_eq!(state.lead.first_name, "Ana");

        let state = reduce(state, LeadFormAction::Submitted(true));
        assert!(!state.submitting);
        assert_eq!(state.lead, Lead::default());
        assert_eq!(state.notice, Some(Notice::Thanks));
    }

    #[test]
    fn test_failed_submit_keeps_values() {
        let state = reduce(LeadFormState::default(), LeadFormAction::Edit(LeadField::Email, "a@b.co".into()));
        let state = reduce(state, LeadFormAction::Submit);
        let state = reduce(state, LeadFormAction::Submitted(false));
        assert_eq!(state.lead.email, "a@b.co");
        assert_eq!(state.notice, Some(Notice::RetryLater));

        let state = reduce(state, LeadFormAction::DismissNotice);
        assert_eq!(state.notice, None);
    }

    #[test]
    fn test_submit_while_in_flight_is_ignored() {
        let first = Rc::new(reduce(LeadFormState::default(), LeadFormAction::Submit));
        let second = first.clone().reduce(LeadFormAction::Submit);
        assert!(Rc::ptr_eq(&first, &second));
    }
}
