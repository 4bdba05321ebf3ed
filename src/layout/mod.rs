//! Style cascade and layout resolution.
//!
//! [`apply_cascade`] styles one element's root node; it is called by the
//! conversion driver in document order, parents before children.

pub mod apply;
pub mod cascade;
pub mod context;
pub mod flex;
pub mod units;

pub use apply::{apply_property, ApplyError};
pub use cascade::{apply_cascade, SIZE_EPSILON};
pub use context::{declared_style, LayoutContext};
pub use units::{UnitResolver, DEFAULT_FONT_SIZE, ROOT_FONT_SIZE};
