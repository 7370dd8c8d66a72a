//! Donut-ring geometry.
//!
//! The same stacked-arc derivation an SVG `stroke-dasharray` donut uses:
//! each slice gets an arc length proportional to its share of the total and
//! a negative dash offset equal to the cumulative share before it.

use std::f64::consts::PI;

/// Ring radius used by the dashboard donuts.
pub const DONUT_RADIUS: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutArc {
    /// Share of the total, 0-100.
    pub percent: f64,
    /// Arc length along the circle.
    pub length: f64,
    /// Dash offset of the arc start (negated cumulative length).
    pub offset: f64,
}

impl DonutArc {
    /// Fraction of the full turn where this arc starts.
    pub fn start_fraction(&self, radius: f64) -> f64 {
        -self.offset / circumference(radius)
    }

    /// Fraction of the full turn this arc covers.
    pub fn sweep_fraction(&self, radius: f64) -> f64 {
        self.length / circumference(radius)
    }
}

pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Per-slice arc geometry for one stacked ring. A zero total yields
/// all-zero arcs rather than dividing by zero.
pub fn donut_arcs(values: &[u64], radius: f64) -> Vec<DonutArc> {
    let circ = circumference(radius);
    let total: u64 = values.iter().sum();
    let mut cumulative = 0.0;
    values
        .iter()
        .map(|&value| {
            let percent = if total == 0 {
                0.0
            } else {
                value as f64 / total as f64 * 100.0
            };
            let arc = DonutArc {
                percent,
                length: percent / 100.0 * circ,
                offset: -(cumulative / 100.0) * circ,
            };
            cumulative += percent;
            arc
        })
        .collect()
}
