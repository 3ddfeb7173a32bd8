//! Metadata graph access for binding discovery.
//!
//! The indexer does not load assemblies itself. It reads an already resolved graph of type
//! definitions through two small traits, so any loader can feed it:
//!
//! - [`HasRegistrationAnnotations`] - exposes the custom attributes of a type or member
//! - [`TypeNode`] - a type definition with its members across fields, properties, events and
//!   methods
//!
//! [`model`] provides an owned implementation of both, used by the command line front end and
//! by tests.
//!
//! # Examples
//!
//! ```rust
//! use jniscope::metadata::{
//!     CustomAttribute, HasRegistrationAnnotations, MemberDef, MemberKind, Token, TypeDef,
//!     TypeNode, REGISTER_ATTRIBUTE,
//! };
//!
//! let view = TypeDef::new(Token::new(0x0200_0010), "Android.Views", "View")
//!     .with_attribute(CustomAttribute::register("android/view/View", None))
//!     .with_member(
//!         MemberKind::Method,
//!         MemberDef::new(Token::new(0x0600_0100), "Invalidate")
//!             .with_attribute(CustomAttribute::register("invalidate", Some("()V"))),
//!     );
//!
//! assert_eq!(view.registrations(REGISTER_ATTRIBUTE).count(), 1);
//! assert_eq!(view.members().count(), 1);
//! ```

/// Custom attribute values and the registration capability
pub mod attributes;
/// Owned metadata graph
pub mod model;
/// Metadata tokens
pub mod token;

pub use attributes::{
    AttributeArgument, CustomAttribute, HasRegistrationAnnotations, Registration,
    REGISTER_ATTRIBUTE,
};
pub use model::{
    AssemblyDef, MemberDef, MemberKind, MemberKinds, MetadataGraph, ModuleDef, TypeDef,
    TypeNode, MONO_ANDROID_ASSEMBLY,
};
pub use token::Token;
