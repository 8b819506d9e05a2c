//! Inspector bindings for Int4D vector types
//!
//! Presents vectors as a label plus one integer field per component, the
//! way a property editor shows them. Nothing here draws: callers take the
//! computed [`FieldLayout`] and the display strings and render them with
//! whatever UI toolkit they use, then feed text edits back through
//! [`Inspector::edit`].

mod binding;
mod error;
mod layout;

pub use binding::{Field, Inspectable, Inspector};
pub use error::InspectorError;
pub use layout::{FieldLayout, LayoutConfig, Rect};
