// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # jniscope
//!
//! Discovers the Java classes and members a .NET for Android application reaches through its
//! binding assemblies, and renders them as ProGuard keep rules so the Java side survives
//! shrinking.
//!
//! Binding assemblies mark every bound type and member with a registration attribute
//! (`Android.Runtime.RegisterAttribute`) carrying the Java name and, for methods, the compact
//! JNI signature. `jniscope` walks an already loaded metadata graph, indexes those
//! registrations by Java class, decodes the signatures into Java declarations and writes the
//! result in ProGuard's configuration syntax.
//!
//! ## Quick Start
//!
//! ```rust
//! use jniscope::prelude::*;
//!
//! let view = TypeDef::new(Token::new(0x0200_0010), "Android.Views", "View")
//!     .with_attribute(CustomAttribute::register("android/view/View", None))
//!     .with_member(
//!         MemberKind::Method,
//!         MemberDef::new(Token::new(0x0600_0100), "OnClick")
//!             .with_attribute(CustomAttribute::register("onClick", Some("(Landroid/view/View;)V"))),
//!     );
//!
//! let indexed = BindingIndexer::default().crawl(view.flatten());
//! let rules = KeepRules::new(&indexed).render()?;
//! assert!(rules.ends_with("-keep class android.view.View {\n\tvoid onClick(android.view.View);\n}\n"));
//! # Ok::<(), jniscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`descriptor`] - Compact JNI descriptor parsing and Java declaration rendering
//! - [`metadata`] - Traits the indexer reads a metadata graph through, plus an owned model
//! - [`indexer`] - Registration discovery, grouping by Java name
//! - [`keep`] - ProGuard document rendering
//! - [`Error`] and [`Result`] - Error handling
//!
//! Loading assemblies is left to the caller: anything implementing
//! [`metadata::TypeNode`] can be crawled. The owned [`metadata::MetadataGraph`] deserializes
//! from JSON with the `serde` feature enabled.
//!
//! ## Error Handling
//!
//! Crawling never fails; types and registrations that carry nothing usable are skipped.
//! Signatures are validated when they are decoded, so a malformed one surfaces from
//! [`keep::KeepRules::render`] or [`descriptor::decode_member`]:
//!
//! ```rust
//! use jniscope::{descriptor::decode_member, Error};
//!
//! match decode_member("foo", "(I") {
//!     Ok(line) => println!("{line}"),
//!     Err(Error::MalformedDescriptor { position, .. }) => println!("bad signature at {position}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use jniscope::prelude::*;
///
/// let indexer = BindingIndexer::new(IndexerConfig::android());
/// let indexed = indexer.crawl(std::iter::empty::<&TypeDef>());
/// assert_eq!(KeepRules::new(&indexed).render()?, PREAMBLE);
/// # Ok::<(), jniscope::Error>(())
/// ```
pub mod prelude;

/// Compact JNI descriptor decoding
///
/// # Key Types
///
/// - [`descriptor::JniType`] - A decoded descriptor
/// - [`descriptor::DescriptorParser`] - Cursor-based parser
///
/// # Main Functions
///
/// - [`descriptor::parse_descriptor`] - Parse exactly one descriptor
/// - [`descriptor::decode_member`] - Render a member declaration
pub mod descriptor;

/// Metadata graph traits and model
pub mod metadata;

/// Registration discovery
pub mod indexer;

/// ProGuard keep-rule rendering
pub mod keep;

/// `jniscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `jniscope` Error type
///
/// Covers malformed descriptors and I/O failures while writing rendered rules.
pub use error::Error;
