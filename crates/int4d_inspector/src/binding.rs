//! Binding between editable labelled fields and vector values

use int4d_math::{AnchoredVec4i, MathResult, NumberFormat, NumberLocale, Vec2i, Vec3i, Vec4i};

use crate::error::InspectorError;
use crate::layout::{FieldLayout, LayoutConfig, Rect};

const LABELS: [&str; 4] = ["X", "Y", "Z", "W"];

/// One editable component
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    /// Component index passed back to [`Inspectable::set_field`]
    pub slot: usize,
    pub value: i32,
}

/// A value whose integer components can be shown and edited one at a time
pub trait Inspectable {
    fn fields(&self) -> Vec<Field>;

    fn set_field(&mut self, slot: usize, value: i32) -> MathResult<()>;
}

fn labelled(values: &[i32]) -> Vec<Field> {
    values
        .iter()
        .zip(LABELS)
        .enumerate()
        .map(|(slot, (&value, label))| Field { label, slot, value })
        .collect()
}

impl Inspectable for Vec4i {
    fn fields(&self) -> Vec<Field> {
        labelled(&self.to_array())
    }

    fn set_field(&mut self, slot: usize, value: i32) -> MathResult<()> {
        self.set(slot, value)
    }
}

/// Edits go to the value; the origin is not exposed
impl Inspectable for AnchoredVec4i {
    fn fields(&self) -> Vec<Field> {
        self.value().fields()
    }

    fn set_field(&mut self, slot: usize, value: i32) -> MathResult<()> {
        self.value_mut().set(slot, value)
    }
}

impl Inspectable for Vec3i {
    fn fields(&self) -> Vec<Field> {
        labelled(&[self.x, self.y, self.z])
    }

    fn set_field(&mut self, slot: usize, value: i32) -> MathResult<()> {
        self.set(slot, value)
    }
}

impl Inspectable for Vec2i {
    fn fields(&self) -> Vec<Field> {
        labelled(&[self.x, self.y])
    }

    fn set_field(&mut self, slot: usize, value: i32) -> MathResult<()> {
        self.set(slot, value)
    }
}

/// Presents an [`Inspectable`] as labelled text fields and applies edits
pub struct Inspector<'a, T: Inspectable> {
    target: &'a mut T,
    format: NumberFormat,
    locale: NumberLocale,
}

impl<'a, T: Inspectable> Inspector<'a, T> {
    /// Bind to `target`, displaying plain integers with invariant symbols
    pub fn new(target: &'a mut T) -> Self {
        Self {
            target,
            format: NumberFormat::default(),
            locale: NumberLocale::INVARIANT,
        }
    }

    pub fn with_format(mut self, format: NumberFormat, locale: NumberLocale) -> Self {
        self.format = format;
        self.locale = locale;
        self
    }

    pub fn target(&self) -> &T {
        &*self.target
    }

    pub fn field_labels(&self) -> Vec<&'static str> {
        self.target.fields().iter().map(|f| f.label).collect()
    }

    /// Current component values rendered with the bound format
    pub fn display_values(&self) -> Vec<String> {
        self.target
            .fields()
            .iter()
            .map(|f| self.format.format_int(f.value, &self.locale))
            .collect()
    }

    /// Parse `text` and write it to the field labelled `label`
    ///
    /// Labels match case-insensitively. Returns the value written.
    pub fn edit(&mut self, label: &str, text: &str) -> Result<i32, InspectorError> {
        let field = self
            .target
            .fields()
            .into_iter()
            .find(|f| f.label.eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| InspectorError::UnknownField(label.to_string()))?;

        let value: i32 = text.trim().parse().map_err(|_| InspectorError::Parse {
            field: field.label.to_string(),
            text: text.to_string(),
        })?;

        if value == field.value {
            log::trace!("Inspector field {} unchanged at {}", field.label, value);
            return Ok(value);
        }
        self.target.set_field(field.slot, value)?;
        log::debug!("Inspector field {} changed from {} to {}", field.label, field.value, value);
        Ok(value)
    }

    /// Rectangles for this target's label and fields
    pub fn layout(&self, position: Rect, label_width: f32, view_width: f32, config: &LayoutConfig) -> FieldLayout {
        let count = self.target.fields().len();
        FieldLayout::compute_n(count, position, label_width, view_width, config)
    }
}
