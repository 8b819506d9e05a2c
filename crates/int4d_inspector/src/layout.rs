//! Field layout for a single inspector row
//!
//! A row is a label followed by one integer field per component. Narrow
//! views cannot fit both on one line, so at or below
//! [`LayoutConfig::stack_below_width`] the fields drop to a second line
//! spanning the full row width and the row doubles in height.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in view coordinates (y grows downward)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn x_max(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn y_max(&self) -> f32 {
        self.y + self.height
    }
}

/// Layout tuning
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal gap between component fields
    pub spacing: f32,
    /// View widths at or below this stack the fields under the label
    pub stack_below_width: f32,
    /// Height of one line of controls
    pub line_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spacing: 20.0,
            stack_below_width: 475.0,
            line_height: 18.0,
        }
    }
}

/// Computed rectangles for one row
#[derive(Clone, Debug, PartialEq)]
pub struct FieldLayout {
    pub label: Rect,
    /// One rect per component, left to right
    pub fields: Vec<Rect>,
    /// Total height the row occupies
    pub height: f32,
    /// Whether the fields were moved below the label
    pub stacked: bool,
}

impl FieldLayout {
    /// Lay out a four-component row
    pub fn compute(position: Rect, label_width: f32, view_width: f32, config: &LayoutConfig) -> Self {
        Self::compute_n(4, position, label_width, view_width, config)
    }

    /// Lay out a row with `count` component fields
    pub fn compute_n(
        count: usize,
        position: Rect,
        label_width: f32,
        view_width: f32,
        config: &LayoutConfig,
    ) -> Self {
        let line = config.line_height;
        let stacked = view_width <= config.stack_below_width;

        let (label, fields_x, fields_y, available) = if stacked {
            (
                Rect::new(position.x, position.y, position.width, line),
                position.x,
                position.y + line,
                position.width,
            )
        } else {
            let label_width = label_width.min(position.width);
            (
                Rect::new(position.x, position.y, label_width, line),
                position.x + label_width,
                position.y,
                position.width - label_width,
            )
        };

        let fields = if count == 0 {
            Vec::new()
        } else {
            let gaps = config.spacing * (count - 1) as f32;
            let width = ((available - gaps) / count as f32).max(0.0);
            (0..count)
                .map(|i| Rect::new(fields_x + i as f32 * (width + config.spacing), fields_y, width, line))
                .collect()
        };

        Self {
            label,
            fields,
            height: if stacked { 2.0 * line } else { line },
            stacked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_wide_view_single_line() {
        let config = LayoutConfig::default();
        let row = Rect::new(0.0, 10.0, 500.0, 18.0);
        let layout = FieldLayout::compute(row, 140.0, 600.0, &config);

        assert!(!layout.stacked);
        assert_eq!(layout.height, 18.0);
        assert_eq!(layout.label, Rect::new(0.0, 10.0, 140.0, 18.0));
        assert_eq!(layout.fields.len(), 4);
        // (500 - 140 - 3 * 20) / 4 = 75
        assert!(approx(layout.fields[0].width, 75.0));
        assert!(approx(layout.fields[0].x, 140.0));
        assert!(approx(layout.fields[1].x, layout.fields[0].x_max() + 20.0));
        assert!(approx(layout.fields[3].x_max(), 500.0));
        assert!(layout.fields.iter().all(|f| f.y == 10.0));
    }

    #[test]
    fn test_narrow_view_stacks_fields() {
        let config = LayoutConfig::default();
        let row = Rect::new(0.0, 0.0, 400.0, 18.0);
        let layout = FieldLayout::compute(row, 140.0, 475.0, &config);

        assert!(layout.stacked);
        assert_eq!(layout.height, 36.0);
        assert_eq!(layout.label.width, 400.0);
        assert!(layout.fields.iter().all(|f| f.y == 18.0));
        assert!(approx(layout.fields[0].x, 0.0));
        assert!(approx(layout.fields[3].x_max(), 400.0));
    }

    #[test]
    fn test_fields_never_negative_width() {
        let config = LayoutConfig::default();
        let layout = FieldLayout::compute(Rect::new(0.0, 0.0, 50.0, 18.0), 140.0, 900.0, &config);
        assert!(layout.fields.iter().all(|f| f.width >= 0.0));
    }

    #[test]
    fn test_two_component_row() {
        let config = LayoutConfig::default();
        let layout = FieldLayout::compute_n(2, Rect::new(0.0, 0.0, 300.0, 18.0), 100.0, 800.0, &config);
        assert_eq!(layout.fields.len(), 2);
        // (300 - 100 - 20) / 2 = 90
        assert!(approx(layout.fields[1].width, 90.0));
    }
}
