//! Binding discovery over a metadata graph.
//!
//! [`BindingIndexer::crawl`] walks a sequence of type definitions, picks out those registered
//! under a Java name, and collects the registered members of each one. The result is one
//! [`IndexedType`] per distinct Java name, in the order the names were first seen:
//!
//! - Types without a registration are skipped, members and all.
//! - Types registered under the same Java name share one entry; their members are merged.
//! - Member registrations without a name are ignored.
//! - Identical `(name, signature)` registrations collapse into one [`RegisteredMember`].
//!
//! Signatures are stored as found; they are validated only when decoded.
//!
//! # Examples
//!
//! ```rust
//! use jniscope::{
//!     indexer::BindingIndexer,
//!     metadata::{CustomAttribute, MemberDef, MemberKind, Token, TypeDef},
//! };
//!
//! let view = TypeDef::new(Token::new(0x0200_0010), "Android.Views", "View")
//!     .with_attribute(CustomAttribute::register("android/view/View", None))
//!     .with_member(
//!         MemberKind::Method,
//!         MemberDef::new(Token::new(0x0600_0100), "OnClick")
//!             .with_attribute(CustomAttribute::register("onClick", Some("(Landroid/view/View;)V"))),
//!     );
//!
//! let indexed = BindingIndexer::default().crawl([&view]);
//! assert_eq!(indexed.len(), 1);
//! assert_eq!(indexed[0].external_name(), "android/view/View");
//! assert_eq!(indexed[0].len(), 1);
//! ```

mod config;
mod types;

pub use config::IndexerConfig;
pub use types::{IndexedType, RegisteredMember};

use indexmap::IndexMap;
use log::{debug, trace, warn};

use crate::metadata::{HasRegistrationAnnotations, TypeNode};

/// Crawls type definitions for Java binding registrations
///
/// The indexer holds only its configuration. All intermediate state of a crawl lives inside
/// the call, so one instance can serve any number of independent crawls, also from several
/// threads at once.
#[derive(Debug, Clone, Default)]
pub struct BindingIndexer {
    config: IndexerConfig,
}

impl BindingIndexer {
    /// Creates an indexer with the given configuration
    #[must_use]
    pub fn new(config: IndexerConfig) -> Self {
        BindingIndexer { config }
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Index every registered type in `nodes`
    ///
    /// `nodes` must already contain nested types; only the types handed in are visited.
    pub fn crawl<'a, T, I>(&self, nodes: I) -> Vec<IndexedType>
    where
        T: TypeNode + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut index: IndexMap<String, IndexedType> = IndexMap::new();

        for node in nodes {
            let Some(external_name) = self.external_name(node) else {
                trace!("{} ({}) is not registered", node.full_name(), node.token());
                continue;
            };

            if index.contains_key(external_name) {
                debug!(
                    "{} ({}) merges into existing entry {}",
                    node.full_name(),
                    node.token(),
                    external_name
                );
            }
            let entry = index
                .entry(external_name.to_string())
                .or_insert_with(|| IndexedType::new(external_name));

            for (kind, member) in node.members() {
                if !self.config.member_kinds.includes(kind) {
                    continue;
                }

                for registration in member.registrations(&self.config.attribute_type) {
                    let Some(name) = registration.name else {
                        debug!(
                            "{} of {} has a registration without a name, ignoring it",
                            kind,
                            node.full_name()
                        );
                        continue;
                    };

                    let retained = RegisteredMember::new(name, registration.signature);
                    trace!("{external_name}: {kind} {name} {:?}", retained.signature());
                    entry.insert(retained);
                }
            }
        }

        debug!("indexed {} registered types", index.len());
        index.into_values().collect()
    }

    /// Java name a type is registered under
    fn external_name<'n, T: TypeNode>(&self, node: &'n T) -> Option<&'n str> {
        let mut registrations = node.registrations(&self.config.attribute_type);
        let first = registrations.next()?;
        if registrations.next().is_some() {
            warn!(
                "{} ({}) carries more than one {}, using the first",
                node.full_name(),
                node.token(),
                self.config.attribute_type
            );
        }
        first.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            AttributeArgument, CustomAttribute, MemberDef, MemberKind, MemberKinds, Token,
            TypeDef, REGISTER_ATTRIBUTE,
        },
        test::{bound_type, member, method, plain_type},
    };

    fn names(indexed: &[IndexedType]) -> Vec<&str> {
        indexed.iter().map(IndexedType::external_name).collect()
    }

    #[test]
    fn first_seen_order_and_merge() {
        let b1 = bound_type(1, "B").with_member(MemberKind::Method, method(1, "b1", "()V"));
        let a = bound_type(2, "A").with_member(MemberKind::Method, method(2, "a", "()V"));
        let b2 = bound_type(3, "B").with_member(MemberKind::Method, method(3, "b2", "(I)V"));

        let indexed = BindingIndexer::default().crawl([&b1, &a, &b2]);
        assert_eq!(names(&indexed), vec!["B", "A"]);
        assert!(indexed[0].contains(&RegisteredMember::new("b1", Some("()V"))));
        assert!(indexed[0].contains(&RegisteredMember::new("b2", Some("(I)V"))));
        assert_eq!(indexed[1].len(), 1);
    }

    #[test]
    fn duplicate_node_does_not_duplicate_entry() {
        let view = bound_type(1, "android/view/View")
            .with_member(MemberKind::Method, method(1, "invalidate", "()V"));
        let indexed = BindingIndexer::default().crawl([&view, &view]);
        assert_eq!(indexed.len(), 1);
        assert_eq!(indexed[0].len(), 1);
    }

    #[test]
    fn identical_registrations_collapse() {
        let ty = bound_type(1, "android/app/Activity")
            .with_member(MemberKind::Method, method(1, "finish", "()V"))
            .with_member(MemberKind::Method, method(2, "finish", "()V"))
            .with_member(MemberKind::Field, member(MemberKind::Field, 1, "mTitle", None))
            .with_member(MemberKind::Property, member(MemberKind::Property, 1, "mTitle", None));

        let indexed = BindingIndexer::default().crawl([&ty]);
        assert_eq!(indexed[0].len(), 2);
    }

    #[test]
    fn unregistered_types_are_skipped_with_members() {
        let helper = plain_type(1, "Helper")
            .with_member(MemberKind::Method, method(1, "secret", "()V"));
        let bound = bound_type(2, "android/os/Bundle");

        let indexed = BindingIndexer::default().crawl([&helper, &bound]);
        assert_eq!(names(&indexed), vec!["android/os/Bundle"]);
        assert!(indexed[0].is_empty());
    }

    #[test]
    fn registration_without_name_is_ignored() {
        let nameless = MemberDef::new(Token::from_parts(Token::METHOD_DEF, 1), "Odd")
            .with_attribute(CustomAttribute::new(REGISTER_ATTRIBUTE, Vec::new()))
            .with_attribute(CustomAttribute::new(
                REGISTER_ATTRIBUTE,
                vec![AttributeArgument::Null, "()V".into()],
            ));
        let ty = bound_type(1, "x/Y").with_member(MemberKind::Method, nameless);

        let indexed = BindingIndexer::default().crawl([&ty]);
        assert_eq!(indexed.len(), 1);
        assert!(indexed[0].is_empty());
    }

    #[test]
    fn type_registration_without_name_skips_type() {
        let ty = TypeDef::new(Token::from_parts(Token::TYPE_DEF, 1), "", "Broken")
            .with_attribute(CustomAttribute::new(REGISTER_ATTRIBUTE, vec![AttributeArgument::Null]))
            .with_member(MemberKind::Method, method(1, "run", "()V"));
        assert!(BindingIndexer::default().crawl([&ty]).is_empty());
    }

    #[test]
    fn first_type_registration_wins() {
        let ty = bound_type(1, "first/Name")
            .with_attribute(CustomAttribute::register("second/Name", None));
        let indexed = BindingIndexer::default().crawl([&ty]);
        assert_eq!(names(&indexed), vec!["first/Name"]);
    }

    #[test]
    fn multiple_registrations_on_one_member() {
        let both = method(1, "a", "()V").with_attribute(CustomAttribute::register("b", Some("(J)V")));
        let ty = bound_type(1, "x/Z").with_member(MemberKind::Method, both);
        assert_eq!(BindingIndexer::default().crawl([&ty])[0].len(), 2);
    }

    #[test]
    fn signatures_are_not_validated() {
        let ty = bound_type(1, "x/Bad").with_member(MemberKind::Method, method(1, "m", "((("));
        let indexed = BindingIndexer::default().crawl([&ty]);
        assert!(indexed[0].contains(&RegisteredMember::new("m", Some("((("))));
    }

    #[test]
    fn member_kinds_filter() {
        let ty = bound_type(1, "x/K")
            .with_member(MemberKind::Field, member(MemberKind::Field, 1, "f", None))
            .with_member(MemberKind::Method, method(1, "m", "()V"));

        let indexed = BindingIndexer::new(IndexerConfig::methods_only()).crawl([&ty]);
        assert_eq!(indexed[0].len(), 1);
        assert!(!indexed[0].has_plain_members());

        let none = IndexerConfig::default().with_member_kinds(MemberKinds::empty());
        assert!(BindingIndexer::new(none).crawl([&ty])[0].is_empty());
    }

    #[test]
    fn custom_attribute_type() {
        let ty = TypeDef::new(Token::from_parts(Token::TYPE_DEF, 1), "", "T").with_attribute(
            CustomAttribute::new("Java.Interop.JniTypeSignatureAttribute", vec!["x/T".into()]),
        );

        assert!(BindingIndexer::default().crawl([&ty]).is_empty());

        let config =
            IndexerConfig::default().with_attribute_type("Java.Interop.JniTypeSignatureAttribute");
        assert_eq!(names(&BindingIndexer::new(config).crawl([&ty])), vec!["x/T"]);
    }

    #[test]
    fn crawls_are_independent() {
        let indexer = BindingIndexer::default();
        let a = bound_type(1, "A").with_member(MemberKind::Method, method(1, "a", "()V"));
        let b = bound_type(2, "B");

        assert_eq!(names(&indexer.crawl([&a])), vec!["A"]);
        let second = indexer.crawl([&b]);
        assert_eq!(names(&second), vec!["B"]);
        assert!(second[0].is_empty());
        assert!(indexer.crawl(std::iter::empty::<&TypeDef>()).is_empty());
    }

    #[test]
    fn nested_types_come_from_the_caller() {
        let outer = bound_type(1, "a/Outer")
            .with_nested(bound_type(2, "a/Outer$Inner"));

        assert_eq!(names(&BindingIndexer::default().crawl([&outer])), vec!["a/Outer"]);
        assert_eq!(
            names(&BindingIndexer::default().crawl(outer.flatten())),
            vec!["a/Outer", "a/Outer$Inner"]
        );
    }
}
