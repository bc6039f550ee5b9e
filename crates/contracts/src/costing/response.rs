use serde::{Deserialize, Serialize};

/// Success payload of `POST /api/save`.
///
/// Every field is optional on the decode side: the renderer must survive any
/// subset, and a malformed 2xx body degrades to `SaveResponse::default()`
/// (the empty result record) instead of failing the submit flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub ok: Option<bool>,

    /// Row id of the stored submission.
    #[serde(default)]
    pub id: Option<i64>,

    /// Base cost per ball, USD, rounded to 2 decimals.
    #[serde(default)]
    pub per_ball_usd: Option<f64>,

    /// Quantity the total was computed for.
    #[serde(default)]
    pub quantity: Option<i64>,

    /// Total for the requested quantity, USD, rounded to 2 decimals.
    #[serde(default)]
    pub total_for_quantity_usd: Option<f64>,
}

/// Error payload of a non-2xx response. The message is optional: an
/// unparseable or empty failure body must not break the error path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// One stored submission, as returned by `GET /api/submissions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionRow {
    pub id: i64,
    pub process: String,
    pub supplier: String,
    pub material_thickness: f64,
    pub foam_thickness: f64,
    pub bladder_type: String,
    pub panel_config: i64,
    pub quantity: i64,
    pub per_ball_usd: f64,
    pub total_for_quantity_usd: f64,
    pub created_at: String,
}
