//! Value Objects
//!
//! Small immutable identifiers used as registry keys across the layers.

pub mod type_key;
pub mod view_id;

pub use type_key::TypeKey;
pub use view_id::ViewId;
