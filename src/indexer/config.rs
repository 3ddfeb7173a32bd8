//! Indexer configuration
//!
//! Selects which attribute marks a registration and which member kinds are searched for it.

use crate::metadata::{MemberKinds, REGISTER_ATTRIBUTE};

/// Configuration for a [`crate::indexer::BindingIndexer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    /// Full name of the registration attribute, matched exactly
    pub attribute_type: String,

    /// Member kinds whose registrations are collected
    pub member_kinds: MemberKinds,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            attribute_type: REGISTER_ATTRIBUTE.to_string(),
            member_kinds: MemberKinds::all(),
        }
    }
}

impl IndexerConfig {
    /// Xamarin.Android / .NET for Android bindings: `Android.Runtime.RegisterAttribute` on
    /// every member kind
    #[must_use]
    pub fn android() -> Self {
        Self::default()
    }

    /// Only collects method registrations
    ///
    /// Fields, properties and events then no longer produce the `<fields>` retain line.
    #[must_use]
    pub fn methods_only() -> Self {
        Self {
            member_kinds: MemberKinds::METHODS,
            ..Self::default()
        }
    }

    /// Replaces the registration attribute name
    #[must_use]
    pub fn with_attribute_type(mut self, attribute_type: &str) -> Self {
        self.attribute_type = attribute_type.to_string();
        self
    }

    /// Replaces the inspected member kinds
    #[must_use]
    pub fn with_member_kinds(mut self, member_kinds: MemberKinds) -> Self {
        self.member_kinds = member_kinds;
        self
    }
}
