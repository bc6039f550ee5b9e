//! Shared contract for the ball cost-estimation form.
//!
//! Field names and select option catalogs live here so the frontend menus
//! and the backend cost tables cannot drift apart.

mod response;

pub use response::{ApiErrorBody, SaveResponse, SubmissionRow};

pub const FIELD_PROCESS: &str = "process";
pub const FIELD_SUPPLIER: &str = "supplier";
pub const FIELD_MATERIAL_THICKNESS: &str = "material_thickness";
pub const FIELD_FOAM_THICKNESS: &str = "foam_thickness";
pub const FIELD_BLADDER_TYPE: &str = "bladder_type";
pub const FIELD_PANEL_CONFIG: &str = "panel_config";
pub const FIELD_QUANTITY: &str = "quantity";

/// Every field the form owns. Restored snapshots may only write into these.
pub const FIELD_NAMES: &[&str] = &[
    FIELD_PROCESS,
    FIELD_SUPPLIER,
    FIELD_MATERIAL_THICKNESS,
    FIELD_FOAM_THICKNESS,
    FIELD_BLADDER_TYPE,
    FIELD_PANEL_CONFIG,
    FIELD_QUANTITY,
];

/// Selection fields the save endpoint requires to be present and non-empty.
/// Quantity is optional and defaults to 1 on the server.
pub const REQUIRED_FIELDS: &[&str] = &[
    FIELD_PROCESS,
    FIELD_SUPPLIER,
    FIELD_MATERIAL_THICKNESS,
    FIELD_FOAM_THICKNESS,
    FIELD_BLADDER_TYPE,
    FIELD_PANEL_CONFIG,
];

pub const PROCESS_OPTIONS: &[&str] = &[
    "COT-B",
    "COT-B LFB",
    "Hybrid G-2",
    "Hybrid G-1",
    "Hybrid G-1 Light",
    "Machine",
    "Hand",
];

pub const SUPPLIER_OPTIONS: &[&str] = &["Teijin", "SanFang", "Anli"];

pub const MATERIAL_THICKNESS_OPTIONS: &[&str] = &["0.7", "1.0", "1.2"];

pub const FOAM_THICKNESS_OPTIONS: &[&str] = &["2.0", "2.5", "3.0", "3.5", "4.0"];

pub const BLADDER_TYPE_OPTIONS: &[&str] = &[
    "Wound_SR",
    "Wound_B30",
    "Wound_B50",
    "Wound_B80",
    "Patch",
    "Self_Patch",
    "Foam Filled",
];

pub const PANEL_CONFIG_OPTIONS: &[&str] = &[
    "32", "30", "28", "24", "22", "20", "18", "14", "12", "10", "8", "6", "4",
];
