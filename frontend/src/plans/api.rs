use gloo_net::http::Request;
use log::{error, info};

use super::merge::{merge_plans, PlansResponse, RemoteGroup, ResolvedTier};
use crate::config;
use crate::error::ApiError;

pub async fn fetch_remote_groups() -> Result<Vec<RemoteGroup>, ApiError> {
    let url = config::join_url(config::get_pricing_api_url(), "/v1/plans/list");
    let response = Request::get(&url)
        .header("Content-Type", "application/json")
        .send()
        .await?;

    check_status(response.status())?;
    let body = response.text().await?;
    parse_plans(&body)
}

fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

fn parse_plans(body: &str) -> Result<Vec<RemoteGroup>, ApiError> {
    let response: PlansResponse = serde_json::from_str(body)?;
    Ok(response.data)
}

/// Turns the fetch outcome into the tier list. Any error yields every tier
/// with its fallback id and static price.
fn resolve(fetched: Result<Vec<RemoteGroup>, ApiError>) -> Vec<ResolvedTier> {
    match fetched {
        Ok(groups) => {
            info!("Fetched {} pricing groups", groups.len());
            merge_plans(Some(groups.as_slice()))
        }
        Err(e) => {
            error!("Failed to fetch plans, using static pricing: {}", e);
            merge_plans(None)
        }
    }
}

/// Fetches remote pricing once and merges it into the catalog. Never fails.
pub async fn load_resolved_tiers() -> Vec<ResolvedTier> {
    resolve(fetch_remote_groups().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plans::catalog::{Recurrence, CATALOG};
    use crate::plans::merge::{fallback_id, Price};

    #[test]
    fn test_check_status() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert!(matches!(check_status(404), Err(ApiError::Status(404))));
        assert!(matches!(check_status(500), Err(ApiError::Status(500))));
        assert!(matches!(check_status(302), Err(ApiError::Status(302))));
    }

    #[test]
    fn test_parse_plans() {
        let groups = parse_plans(
            r#"{"data": [{"recurrent": "mensual", "plans": [{"_id": "abc", "title": "Advanced", "price": 60}]}]}"#,
        )
        .unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].plans[0].id.as_deref(), Some("abc"));

        assert!(matches!(parse_plans("<html>502</html>"), Err(ApiError::Decode(_))));
        assert!(matches!(parse_plans(r#"{"plans": []}"#), Err(ApiError::Decode(_))));
    }

    fn assert_all_fallback(tiers: &[ResolvedTier]) {
        assert_eq!(tiers.len(), CATALOG.len());
        for (position, tier) in tiers.iter().enumerate() {
            for recurrence in Recurrence::ALL {
                let pair = tier.pair(recurrence);
                assert_eq!(pair.id, fallback_id(position));
                assert_eq!(pair.price, Price::from(CATALOG[position].static_price(recurrence)));
            }
        }
    }

    #[test]
    fn test_resolve_status_error_uses_fallback() {
        assert_all_fallback(&resolve(Err(ApiError::Status(503))));
    }

    #[test]
    fn test_resolve_decode_error_uses_fallback() {
        let fetched = parse_plans("not json");
        assert!(fetched.is_err());
        assert_all_fallback(&resolve(fetched));
    }

    #[test]
    fn test_resolve_success_merges() {
        let fetched = parse_plans(
            r#"{"data": [{"recurrent": "mensual", "plans": [{"_id": "abc", "title": "Advanced", "price": 60}]}]}"#,
        );
        let tiers = resolve(fetched);
        assert_eq!(tiers.len(), CATALOG.len());
        let advanced = tiers.iter().find(|t| t.name() == "Advanced").unwrap();
        assert_eq!(advanced.pair(Recurrence::Monthly).id, "abc");
        assert_eq!(advanced.pair(Recurrence::Monthly).price, Price::Amount(60.0));
        assert_eq!(advanced.pair(Recurrence::Annual).id, fallback_id(2));
    }
}
