//! # jniscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the jniscope library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all jniscope operations
pub use crate::Error;

/// The result type used throughout jniscope
pub use crate::Result;

// ================================================================================================
// Descriptors
// ================================================================================================

/// Descriptor decoding
pub use crate::descriptor::{decode_member, parse_descriptor, JniPrimitive, JniType};

// ================================================================================================
// Metadata Graph
// ================================================================================================

/// Capability traits the indexer reads through
pub use crate::metadata::{HasRegistrationAnnotations, TypeNode};

/// Owned metadata model
pub use crate::metadata::{
    AttributeArgument, CustomAttribute, MemberDef, MemberKind, MemberKinds, MetadataGraph,
    Token, TypeDef, REGISTER_ATTRIBUTE,
};

// ================================================================================================
// Indexing and Rendering
// ================================================================================================

/// Registration discovery
pub use crate::indexer::{BindingIndexer, IndexedType, IndexerConfig, RegisteredMember};

/// ProGuard output
pub use crate::keep::{KeepRules, PREAMBLE};
