//! Cost tables and the per-ball / per-quantity totals, all in USD.

use thiserror::Error;

pub const LABOR_COST_PER_BALL: f64 = 1.0;
pub const OVERHEAD_COST_PER_BALL: f64 = 1.0;

const MATERIAL_THICKNESS_COST: &[(f64, f64)] = &[(0.7, 1.0), (1.0, 1.3), (1.2, 1.8)];

const FOAM_THICKNESS_COST: &[(f64, f64)] = &[
    (2.0, 0.2),
    (2.5, 0.3),
    (3.0, 0.4),
    (3.5, 0.5),
    (4.0, 0.6),
];

const PANEL_CONFIGS: &[i64] = &[32, 30, 28, 24, 22, 20, 18, 14, 12, 10, 8, 6, 4];

#[derive(Debug, Error, PartialEq)]
pub enum CostingError {
    #[error("Invalid selection: {field} '{value}' is not costed")]
    UnknownOption { field: &'static str, value: String },
}

/// A validated set of selections ready for costing.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub process: &'a str,
    pub supplier: &'a str,
    pub material_thickness: f64,
    pub foam_thickness: f64,
    pub bladder_type: &'a str,
    pub panel_config: i64,
}

fn process_cost(name: &str) -> Option<f64> {
    // Process is currently not priced but must still be a known value.
    match name {
        "COT-B" | "COT-B LFB" | "Hybrid G-2" | "Hybrid G-1" | "Hybrid G-1 Light" | "Machine"
        | "Hand" => Some(0.0),
        _ => None,
    }
}

fn supplier_cost(name: &str) -> Option<f64> {
    match name {
        "Teijin" => Some(2.5),
        "SanFang" => Some(2.0),
        "Anli" => Some(1.3),
        _ => None,
    }
}

fn thickness_cost(table: &[(f64, f64)], mm: f64) -> Option<f64> {
    table
        .iter()
        .find(|(key, _)| (key - mm).abs() < f64::EPSILON)
        .map(|(_, cost)| *cost)
}

fn bladder_cost(name: &str) -> Option<f64> {
    match name {
        "Wound_SR" => Some(2.0),
        "Wound_B30" => Some(2.5),
        "Wound_B50" => Some(2.7),
        "Wound_B80" => Some(2.9),
        "Patch" => Some(3.5),
        "Self_Patch" => Some(3.0),
        "Foam Filled" => Some(1.8),
        _ => None,
    }
}

fn panel_cost(panels: i64) -> Option<f64> {
    PANEL_CONFIGS.contains(&panels).then_some(0.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Base cost of one ball: the six table lookups plus labor and overhead,
/// rounded to 2 decimals.
pub fn base_per_ball_usd(sel: &Selection) -> Result<f64, CostingError> {
    let unknown = |field: &'static str, value: String| CostingError::UnknownOption { field, value };

    let sum = process_cost(sel.process)
        .ok_or_else(|| unknown("process", sel.process.to_string()))?
        + supplier_cost(sel.supplier)
            .ok_or_else(|| unknown("supplier", sel.supplier.to_string()))?
        + thickness_cost(MATERIAL_THICKNESS_COST, sel.material_thickness)
            .ok_or_else(|| unknown("material_thickness", sel.material_thickness.to_string()))?
        + thickness_cost(FOAM_THICKNESS_COST, sel.foam_thickness)
            .ok_or_else(|| unknown("foam_thickness", sel.foam_thickness.to_string()))?
        + bladder_cost(sel.bladder_type)
            .ok_or_else(|| unknown("bladder_type", sel.bladder_type.to_string()))?
        + panel_cost(sel.panel_config)
            .ok_or_else(|| unknown("panel_config", sel.panel_config.to_string()))?
        + LABOR_COST_PER_BALL
        + OVERHEAD_COST_PER_BALL;

    Ok(round2(sum))
}

pub fn total_for_quantity_usd(per_ball: f64, quantity: i64) -> f64 {
    round2(per_ball * quantity as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection() -> Selection<'static> {
        Selection {
            process: "COT-B",
            supplier: "Teijin",
            material_thickness: 0.7,
            foam_thickness: 2.0,
            bladder_type: "Wound_SR",
            panel_config: 32,
        }
    }

    #[test]
    fn per_ball_sums_tables_labor_and_overhead() {
        // 0.0 + 2.5 + 1.0 + 0.2 + 2.0 + 0.0 + 1.0 + 1.0
        assert_eq!(base_per_ball_usd(&selection()), Ok(7.7));
    }

    #[test]
    fn dearest_configuration() {
        let sel = Selection {
            supplier: "Teijin",
            material_thickness: 1.2,
            foam_thickness: 4.0,
            bladder_type: "Patch",
            ..selection()
        };
        // 2.5 + 1.8 + 0.6 + 3.5 + 2.0 labor/overhead
        assert_eq!(base_per_ball_usd(&sel), Ok(10.4));
    }

    #[test]
    fn unknown_option_is_rejected_with_its_field() {
        let sel = Selection {
            supplier: "Nokona",
            ..selection()
        };
        assert_eq!(
            base_per_ball_usd(&sel),
            Err(CostingError::UnknownOption {
                field: "supplier",
                value: "Nokona".to_string()
            })
        );

        let sel = Selection {
            material_thickness: 0.8,
            ..selection()
        };
        assert!(base_per_ball_usd(&sel).is_err());
    }

    #[test]
    fn quantity_total_rounds_to_cents() {
        assert_eq!(total_for_quantity_usd(7.7, 5), 38.5);
        assert_eq!(total_for_quantity_usd(1.5, 5), 7.5);
        assert_eq!(total_for_quantity_usd(3.33, 3), 9.99);
    }
}
