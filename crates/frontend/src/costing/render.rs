//! Pure mapping from a save response to the two display strings.
//!
//! Never panics on missing fields: absent values render as blank so a
//! degraded payload still produces usable status text.

use super::snapshot::FormSnapshot;
use contracts::costing::{SaveResponse, FIELD_QUANTITY};

/// Status line for a completed save, e.g. `Saved (ID 42). Per ball USD: 1.5`.
pub fn status_line(response: &SaveResponse) -> String {
    let id = response.id.map(|v| v.to_string()).unwrap_or_default();
    let per_ball = response
        .per_ball_usd
        .map(|v| v.to_string())
        .unwrap_or_default();
    format!("Saved (ID {}). Per ball USD: {}", id, per_ball)
}

/// Total-price line, e.g. `7.5 USD for 5 ball(s)`.
///
/// Quantity falls back to the submitted snapshot when the response omits it.
/// Without a total there is nothing to show and the line is empty.
pub fn total_price_line(response: &SaveResponse, snapshot: &FormSnapshot) -> String {
    let Some(total) = response.total_for_quantity_usd else {
        return String::new();
    };

    let quantity = response
        .quantity
        .map(|v| v.to_string())
        .or_else(|| snapshot.get(FIELD_QUANTITY).map(str::to_string));

    match quantity {
        Some(q) if !q.is_empty() => format!("{} USD for {} ball(s)", total, q),
        _ => format!("{} USD", total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_response() -> SaveResponse {
        SaveResponse {
            ok: Some(true),
            id: Some(42),
            per_ball_usd: Some(1.5),
            quantity: Some(5),
            total_for_quantity_usd: Some(7.5),
        }
    }

    #[test]
    fn status_line_includes_id_and_per_ball_price() {
        let line = status_line(&full_response());
        assert!(line.contains("42"), "{line}");
        assert_eq!(line, "Saved (ID 42). Per ball USD: 1.5");
    }

    #[test]
    fn total_line_includes_total_and_quantity() {
        let line = total_price_line(&full_response(), &FormSnapshot::default());
        assert!(line.contains("7.5"), "{line}");
        assert_eq!(line, "7.5 USD for 5 ball(s)");
    }

    #[test]
    fn quantity_falls_back_to_the_snapshot() {
        let response = SaveResponse {
            quantity: None,
            ..full_response()
        };
        let snapshot = FormSnapshot::default().with_field(FIELD_QUANTITY, "5".to_string());
        assert_eq!(total_price_line(&response, &snapshot), "7.5 USD for 5 ball(s)");
    }

    #[test]
    fn empty_result_record_renders_without_panicking() {
        let empty = SaveResponse::default();
        assert_eq!(status_line(&empty), "Saved (ID ). Per ball USD: ");
        assert_eq!(total_price_line(&empty, &FormSnapshot::default()), "");
    }

    #[test]
    fn total_without_any_quantity_still_renders() {
        let response = SaveResponse {
            quantity: None,
            ..full_response()
        };
        assert_eq!(
            total_price_line(&response, &FormSnapshot::default()),
            "7.5 USD"
        );
    }
}
