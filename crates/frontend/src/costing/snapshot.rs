use contracts::costing::{
    BLADDER_TYPE_OPTIONS, FIELD_BLADDER_TYPE, FIELD_FOAM_THICKNESS, FIELD_MATERIAL_THICKNESS,
    FIELD_NAMES, FIELD_PANEL_CONFIG, FIELD_PROCESS, FIELD_QUANTITY, FIELD_SUPPLIER,
    FOAM_THICKNESS_OPTIONS, MATERIAL_THICKNESS_OPTIONS, PANEL_CONFIG_OPTIONS, PROCESS_OPTIONS,
    SUPPLIER_OPTIONS,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable capture of the form's field values at a point in time.
///
/// Serializes to a flat JSON object (field name -> string value), which is
/// both the persisted-slot format and the save-request body. Snapshots are
/// replaced wholesale, never edited in place: `with_field` consumes the old
/// value and returns a fresh one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSnapshot(BTreeMap<String, String>);

impl FormSnapshot {
    /// The form's initial values: the first option of every select, quantity 1.
    pub fn form_defaults() -> Self {
        let mut values = BTreeMap::new();
        values.insert(FIELD_PROCESS.to_string(), PROCESS_OPTIONS[0].to_string());
        values.insert(FIELD_SUPPLIER.to_string(), SUPPLIER_OPTIONS[0].to_string());
        values.insert(
            FIELD_MATERIAL_THICKNESS.to_string(),
            MATERIAL_THICKNESS_OPTIONS[0].to_string(),
        );
        values.insert(
            FIELD_FOAM_THICKNESS.to_string(),
            FOAM_THICKNESS_OPTIONS[0].to_string(),
        );
        values.insert(
            FIELD_BLADDER_TYPE.to_string(),
            BLADDER_TYPE_OPTIONS[0].to_string(),
        );
        values.insert(
            FIELD_PANEL_CONFIG.to_string(),
            PANEL_CONFIG_OPTIONS[0].to_string(),
        );
        values.insert(FIELD_QUANTITY.to_string(), "1".to_string());
        Self(values)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns a new snapshot with one field replaced.
    pub fn with_field(mut self, field: &str, value: String) -> Self {
        self.0.insert(field.to_string(), value);
        self
    }

    /// Applies a restored snapshot onto this one. Only field names the form
    /// owns are written; unknown keys in `saved` are ignored, and form fields
    /// absent from `saved` keep their current value.
    pub fn merged_with_saved(mut self, saved: &FormSnapshot) -> Self {
        for field in FIELD_NAMES {
            if let Some(value) = saved.get(field) {
                self.0.insert(field.to_string(), value.to_string());
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_field_leaves_original_semantics_intact() {
        let a = FormSnapshot::form_defaults();
        let b = a.clone().with_field(FIELD_QUANTITY, "5".to_string());
        assert_eq!(a.get(FIELD_QUANTITY), Some("1"));
        assert_eq!(b.get(FIELD_QUANTITY), Some("5"));
    }

    #[test]
    fn merge_ignores_unknown_keys_and_keeps_missing_fields() {
        let saved = FormSnapshot::default()
            .with_field(FIELD_SUPPLIER, "Anli".to_string())
            .with_field("not_a_form_field", "x".to_string());

        let merged = FormSnapshot::form_defaults().merged_with_saved(&saved);
        assert_eq!(merged.get(FIELD_SUPPLIER), Some("Anli"));
        assert_eq!(merged.get("not_a_form_field"), None);
        // Field absent from the saved snapshot keeps its default.
        assert_eq!(merged.get(FIELD_QUANTITY), Some("1"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let snapshot = FormSnapshot::default()
            .with_field(FIELD_QUANTITY, "5".to_string())
            .with_field(FIELD_SUPPLIER, "Teijin".to_string());
        let raw = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(raw, r#"{"quantity":"5","supplier":"Teijin"}"#);
    }
}
