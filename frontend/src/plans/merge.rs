use std::collections::HashMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use super::catalog::{Recurrence, StaticPrice, Tier, CATALOG, CONTACT_US_LABEL};

/// A price as shown to the user. Remote prices are kept exactly as the API
/// sent them, so a string price stays a string.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl Price {
    pub fn is_free(&self) -> bool {
        matches!(self, Price::Amount(amount) if *amount == 0.0)
    }
}

impl From<StaticPrice> for Price {
    fn from(price: StaticPrice) -> Self {
        match price {
            StaticPrice::Amount(amount) => Price::Amount(f64::from(amount)),
            StaticPrice::ContactUs => Price::Label(CONTACT_US_LABEL.to_string()),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

// null, missing or mistyped fields become None instead of failing the body
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => Some(value),
        Lenient::Other(_) => None,
    })
}

/// One plan as the API sent it. Entries missing an id, title or price are
/// kept here and skipped when indexing.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RemotePlan {
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<Price>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RemoteGroup {
    pub recurrent: String,
    #[serde(default)]
    pub plans: Vec<RemotePlan>,
}

#[derive(Deserialize, Debug)]
pub struct PlansResponse {
    pub data: Vec<RemoteGroup>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedPair {
    pub id: String,
    pub price: Price,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTier {
    pub tier: &'static Tier,
    resolved: [ResolvedPair; 4],
}

impl ResolvedTier {
    pub fn name(&self) -> &'static str {
        self.tier.name
    }

    pub fn pair(&self, recurrence: Recurrence) -> &ResolvedPair {
        &self.resolved[recurrence.index()]
    }
}

/// Identifier used for a tier that has no matching remote plan. Derived
/// only from the tier's catalog position so it never changes between loads.
pub fn fallback_id(position: usize) -> String {
    format!("fallback-id-{}", position)
}

type PlanIndex<'a> = HashMap<Recurrence, HashMap<&'a str, (&'a str, &'a Price)>>;

fn index_by_recurrence(groups: &[RemoteGroup]) -> PlanIndex<'_> {
    let mut index = PlanIndex::new();
    for group in groups {
        let Some(recurrence) = Recurrence::from_wire(&group.recurrent) else {
            continue;
        };
        let mut by_title = HashMap::new();
        for plan in &group.plans {
            let (Some(title), Some(id), Some(price)) = (&plan.title, &plan.id, &plan.price) else {
                continue;
            };
            by_title.entry(title.as_str()).or_insert((id.as_str(), price));
        }
        // a repeated group replaces the earlier one
        index.insert(recurrence, by_title);
    }
    index
}

/// Overlays remote pricing onto the static catalog. Every catalog tier comes
/// back with all four recurrences resolved; `None` means the fetch failed.
pub fn merge_plans(remote: Option<&[RemoteGroup]>) -> Vec<ResolvedTier> {
    let index = index_by_recurrence(remote.unwrap_or_default());

    CATALOG
        .iter()
        .enumerate()
        .map(|(position, tier)| {
            let resolved = Recurrence::ALL.map(|recurrence| {
                match index.get(&recurrence).and_then(|plans| plans.get(tier.name)) {
                    Some((id, price)) => ResolvedPair {
                        id: id.to_string(),
                        price: (*price).clone(),
                    },
                    None => ResolvedPair {
                        id: fallback_id(position),
                        price: tier.static_price(recurrence).into(),
                    },
                }
            });
            ResolvedTier { tier, resolved }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups(body: &str) -> Vec<RemoteGroup> {
        serde_json::from_str::<PlansResponse>(body).unwrap().data
    }

    fn find<'a>(tiers: &'a [ResolvedTier], name: &str) -> &'a ResolvedTier {
        tiers.iter().find(|t| t.name() == name).unwrap()
    }

    #[test]
    fn test_failed_fetch_resolves_every_tier() {
        let tiers = merge_plans(None);
        assert_eq!(tiers.len(), CATALOG.len());
        for (position, resolved) in tiers.iter().enumerate() {
            assert_eq!(resolved.tier, &CATALOG[position]);
            for recurrence in Recurrence::ALL {
                let pair = resolved.pair(recurrence);
                assert_eq!(pair.id, fallback_id(position));
                assert_eq!(pair.price, Price::from(CATALOG[position].static_price(recurrence)));
            }
        }
    }

    #[test]
    fn test_fallback_ids_stable_across_calls() {
        assert_eq!(merge_plans(None), merge_plans(None));
        assert_eq!(merge_plans(Some(&[][..])), merge_plans(None));
    }

    #[test]
    fn test_single_monthly_group() {
        let data = groups(
            r#"{"data": [{"recurrent": "mensual", "plans": [{"_id": "abc", "title": "Advanced", "price": 60}]}]}"#,
        );
        let tiers = merge_plans(Some(data.as_slice()));
        let advanced = find(&tiers, "Advanced");

        assert_eq!(
            advanced.pair(Recurrence::Monthly),
            &ResolvedPair { id: "abc".into(), price: Price::Amount(60.0) }
        );
        assert_eq!(advanced.pair(Recurrence::Quarterly).id, "fallback-id-2");
        assert_eq!(advanced.pair(Recurrence::Quarterly).price, Price::Amount(153.0));
        assert_eq!(advanced.pair(Recurrence::Semiannual).price, Price::Amount(275.0));
        assert_eq!(advanced.pair(Recurrence::Annual).price, Price::Amount(480.0));

        // tiers absent from the monthly group fall back too
        let basic = find(&tiers, "Basic");
        assert_eq!(basic.pair(Recurrence::Monthly).id, "fallback-id-1");
        assert_eq!(basic.pair(Recurrence::Monthly).price, Price::Amount(29.0));
    }

    #[test]
    fn test_remote_values_kept_verbatim() {
        let data = groups(
            r#"{"data": [
                {"recurrent": "anual", "plans": [
                    {"_id": "p-1", "title": "Professional", "price": 799.99},
                    {"_id": "e-1", "title": "Enterprises", "price": "A convenir"}
                ]}
            ]}"#,
        );
        let tiers = merge_plans(Some(data.as_slice()));

        let professional = find(&tiers, "Professional").pair(Recurrence::Annual);
        assert_eq!(professional.id, "p-1");
        assert_eq!(professional.price, Price::Amount(799.99));

        let enterprise = find(&tiers, "Enterprises").pair(Recurrence::Annual);
        assert_eq!(enterprise.price, Price::Label("A convenir".into()));
        assert_eq!(
            find(&tiers, "Enterprises").pair(Recurrence::Monthly).price,
            Price::Label("Consultar".into())
        );
    }

    #[test]
    fn test_orphans_and_unknown_recurrences_ignored() {
        let data = groups(
            r#"{"data": [
                {"recurrent": "mensual", "plans": [{"_id": "x", "title": "Platinum", "price": 1}]},
                {"recurrent": "bienal", "plans": [{"_id": "y", "title": "Basic", "price": 2}]}
            ]}"#,
        );
        let tiers = merge_plans(Some(data.as_slice()));
        assert_eq!(tiers, merge_plans(None));
    }

    #[test]
    fn test_title_match_is_exact() {
        let data = groups(
            r#"{"data": [{"recurrent": "mensual", "plans": [{"_id": "b", "title": "basic", "price": 1}]}]}"#,
        );
        let tiers = merge_plans(Some(data.as_slice()));
        assert_eq!(find(&tiers, "Basic").pair(Recurrence::Monthly).id, "fallback-id-1");
    }

    #[test]
    fn test_duplicate_entries() {
        let data = groups(
            r#"{"data": [
                {"recurrent": "mensual", "plans": [{"_id": "old", "title": "Basic", "price": 1}]},
                {"recurrent": "mensual", "plans": [
                    {"_id": "first", "title": "Basic", "price": 2},
                    {"_id": "second", "title": "Basic", "price": 3}
                ]}
            ]}"#,
        );
        let tiers = merge_plans(Some(data.as_slice()));
        assert_eq!(find(&tiers, "Basic").pair(Recurrence::Monthly).id, "first");
    }

    #[test]
    fn test_malformed_orphan_keeps_valid_match() {
        let data = groups(
            r#"{"data": [{"recurrent": "mensual", "plans": [
                {"_id": "a", "title": "Basic", "price": 5},
                {"_id": "b", "title": "X", "price": null}
            ]}]}"#,
        );
        let tiers = merge_plans(Some(data.as_slice()));
        assert_eq!(
            find(&tiers, "Basic").pair(Recurrence::Monthly),
            &ResolvedPair { id: "a".into(), price: Price::Amount(5.0) }
        );
    }

    #[test]
    fn test_unusable_entries_fall_back() {
        let data = groups(
            r#"{"data": [{"recurrent": "anual", "plans": [
                {"_id": "no-price", "title": "Basic"},
                {"title": "Advanced", "price": 400},
                {"_id": "obj", "title": "Professional", "price": {"amount": 1}},
                {"_id": 7, "title": "Freemium", "price": 0},
                {"_id": "ok", "title": "Professional", "price": 700}
            ]}]}"#,
        );
        assert_eq!(data[0].plans[0].price, None);
        assert_eq!(data[0].plans[1].id, None);

        let tiers = merge_plans(Some(data.as_slice()));
        assert_eq!(find(&tiers, "Basic").pair(Recurrence::Annual).id, "fallback-id-1");
        assert_eq!(find(&tiers, "Basic").pair(Recurrence::Annual).price, Price::Amount(240.0));
        assert_eq!(find(&tiers, "Advanced").pair(Recurrence::Annual).id, "fallback-id-2");
        assert_eq!(find(&tiers, "Freemium").pair(Recurrence::Annual).id, "fallback-id-0");
        // an unusable entry does not shadow a later usable one
        assert_eq!(
            find(&tiers, "Professional").pair(Recurrence::Annual),
            &ResolvedPair { id: "ok".into(), price: Price::Amount(700.0) }
        );
    }

    #[test]
    fn test_group_without_plans_key() {
        let data = groups(r#"{"data": [{"recurrent": "trimestral"}]}"#);
        assert!(data[0].plans.is_empty());
        assert_eq!(merge_plans(Some(data.as_slice())), merge_plans(None));
    }

    #[test]
    fn test_free_price() {
        assert!(Price::Amount(0.0).is_free());
        assert!(!Price::Amount(29.0).is_free());
        assert!(!Price::Label("0".into()).is_free());
    }
}
