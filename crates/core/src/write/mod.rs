//! Static write-resource schema descriptors.
//!
//! Declarative field-to-column tables consumed by the write
//! orchestration layer. No runtime behavior beyond exposing the
//! structure; consistency between field declarations and write order is
//! a maintainer responsibility, held in place by the tests.

pub mod field;
pub mod resource;

pub use field::{FieldDefinition, FieldKind};
pub use resource::{multi_edit_queue, multi_edit_queue_entries, ResourceDefinition, ResourceId};
