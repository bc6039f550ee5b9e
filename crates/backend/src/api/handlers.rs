use crate::costing::{self, Selection};
use crate::db::{self, NewSubmission};
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use contracts::costing::{
    SaveResponse, SubmissionRow, FIELD_BLADDER_TYPE, FIELD_FOAM_THICKNESS,
    FIELD_MATERIAL_THICKNESS, FIELD_PANEL_CONFIG, FIELD_PROCESS, FIELD_QUANTITY, FIELD_SUPPLIER,
    REQUIRED_FIELDS,
};
use serde_json::json;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

type ApiError = (StatusCode, Json<serde_json::Value>);

fn bad_request(message: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn internal_error() -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Failed to save" })),
    )
}

/// A submission payload after field-presence and numeric validation.
/// Option values are checked later against the cost tables.
#[derive(Debug, PartialEq)]
struct ValidSubmission {
    process: String,
    supplier: String,
    material_thickness: f64,
    foam_thickness: f64,
    bladder_type: String,
    panel_config: i64,
    quantity: i64,
}

/// The request body is the serialized form snapshot: a flat map of field
/// name to string value, so every check starts from strings.
fn validate(data: &BTreeMap<String, String>) -> Result<ValidSubmission, String> {
    let value_of = |field: &str| data.get(field).map(|v| v.trim()).unwrap_or("");

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| value_of(field).is_empty())
        .collect();
    if !missing.is_empty() {
        return Err(format!("Missing fields: {}", missing.join(", ")));
    }

    let material_thickness: f64 = value_of(FIELD_MATERIAL_THICKNESS)
        .parse()
        .map_err(|_| "Thickness values must be numbers".to_string())?;
    let foam_thickness: f64 = value_of(FIELD_FOAM_THICKNESS)
        .parse()
        .map_err(|_| "Thickness values must be numbers".to_string())?;
    let panel_config: i64 = value_of(FIELD_PANEL_CONFIG)
        .parse()
        .map_err(|_| "Panel configuration must be a number".to_string())?;

    // Quantity defaults to 1 when the form omits it.
    let quantity = match value_of(FIELD_QUANTITY) {
        "" => 1,
        raw => raw
            .parse::<i64>()
            .ok()
            .filter(|q| *q >= 1)
            .ok_or_else(|| "Quantity must be an integer ≥ 1".to_string())?,
    };

    Ok(ValidSubmission {
        process: value_of(FIELD_PROCESS).to_string(),
        supplier: value_of(FIELD_SUPPLIER).to_string(),
        material_thickness,
        foam_thickness,
        bladder_type: value_of(FIELD_BLADDER_TYPE).to_string(),
        panel_config,
        quantity,
    })
}

/// POST /api/save
pub async fn save(
    State(pool): State<SqlitePool>,
    Json(data): Json<BTreeMap<String, String>>,
) -> Result<Json<SaveResponse>, ApiError> {
    let valid = validate(&data).map_err(bad_request)?;

    let per_ball = costing::base_per_ball_usd(&Selection {
        process: &valid.process,
        supplier: &valid.supplier,
        material_thickness: valid.material_thickness,
        foam_thickness: valid.foam_thickness,
        bladder_type: &valid.bladder_type,
        panel_config: valid.panel_config,
    })
    .map_err(|e| bad_request(e.to_string()))?;
    let total = costing::total_for_quantity_usd(per_ball, valid.quantity);

    let id = db::insert_submission(
        &pool,
        &NewSubmission {
            process: valid.process,
            supplier: valid.supplier,
            material_thickness: valid.material_thickness,
            foam_thickness: valid.foam_thickness,
            bladder_type: valid.bladder_type,
            panel_config: valid.panel_config,
            quantity: valid.quantity,
            per_ball_usd: per_ball,
            total_for_quantity_usd: total,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!("failed to store submission: {e}");
        internal_error()
    })?;

    Ok(Json(SaveResponse {
        ok: Some(true),
        id: Some(id),
        per_ball_usd: Some(per_ball),
        quantity: Some(valid.quantity),
        total_for_quantity_usd: Some(total),
    }))
}

/// GET /api/submissions
pub async fn list_submissions(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<SubmissionRow>>, ApiError> {
    db::list_submissions(&pool).await.map(Json).map_err(|e| {
        tracing::error!("failed to list submissions: {e}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Failed to load submissions" })),
        )
    })
}
