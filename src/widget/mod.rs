//! Widget kinds and tag-name resolution.

pub mod kind;
pub mod registry;
pub mod resolver;

pub use kind::WidgetKind;
pub use registry::{TypeDescriptor, TypeRegistry, UI_NAMESPACE};
pub use resolver::{KindResolution, KindResolver, ResolveTier, TypeMatcher};
