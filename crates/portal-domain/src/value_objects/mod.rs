//! Value objects
//!
//! Immutable types with no identity: the service-type registry and the
//! public meta document.

pub mod meta;
pub mod service_type;

pub use meta::{MetaDocument, PublicMeta};
pub use service_type::{ServiceType, normalize_service_type};
