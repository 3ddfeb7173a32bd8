//! In-memory metadata graph.
//!
//! A small owned representation of the parts of loaded assemblies the indexer looks at:
//! assemblies, modules, type definitions with their nested types, and the four member kinds.
//! Loaders can build it directly, and with the `serde` feature it deserializes from JSON:
//!
//! ```json
//! {
//!   "assemblies": [{
//!     "name": "Xamarin.AndroidX.Core",
//!     "modules": [{
//!       "name": "Xamarin.AndroidX.Core.dll",
//!       "types": [{
//!         "namespace": "AndroidX.Core.App",
//!         "name": "NotificationCompat",
//!         "custom_attributes": [{
//!           "attribute_type": "Android.Runtime.RegisterAttribute",
//!           "fixed_args": ["androidx/core/app/NotificationCompat"]
//!         }],
//!         "methods": [{
//!           "name": "GetCategory",
//!           "custom_attributes": [{
//!             "attribute_type": "Android.Runtime.RegisterAttribute",
//!             "fixed_args": ["getCategory", "(Landroid/app/Notification;)Ljava/lang/String;"]
//!           }]
//!         }]
//!       }]
//!     }]
//!   }]
//! }
//! ```

use bitflags::bitflags;
use strum::{Display, EnumIter};

use crate::metadata::{CustomAttribute, HasRegistrationAnnotations, Token};

/// Assembly whose types are already kept by the fixed preamble rules
pub const MONO_ANDROID_ASSEMBLY: &str = "Mono.Android";

/// The four kinds of type members that can carry a registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum MemberKind {
    /// Field
    Field,
    /// Property
    Property,
    /// Event
    Event,
    /// Method, constructors included
    Method,
}

impl MemberKind {
    /// The [`MemberKinds`] flag matching this kind
    #[must_use]
    pub fn flag(self) -> MemberKinds {
        match self {
            MemberKind::Field => MemberKinds::FIELDS,
            MemberKind::Property => MemberKinds::PROPERTIES,
            MemberKind::Event => MemberKinds::EVENTS,
            MemberKind::Method => MemberKinds::METHODS,
        }
    }

    /// Metadata table this kind of member lives in
    #[must_use]
    pub fn table(self) -> u8 {
        match self {
            MemberKind::Field => Token::FIELD,
            MemberKind::Property => Token::PROPERTY,
            MemberKind::Event => Token::EVENT,
            MemberKind::Method => Token::METHOD_DEF,
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    /// Set of member kinds the indexer inspects
    pub struct MemberKinds: u8 {
        /// Fields
        const FIELDS = 0x01;
        /// Properties
        const PROPERTIES = 0x02;
        /// Events
        const EVENTS = 0x04;
        /// Methods
        const METHODS = 0x08;
    }
}

impl MemberKinds {
    /// Returns true if `kind` is part of this set
    #[must_use]
    pub fn includes(self, kind: MemberKind) -> bool {
        self.contains(kind.flag())
    }
}

impl Default for MemberKinds {
    fn default() -> Self {
        MemberKinds::all()
    }
}

/// A type-like node of a metadata graph
///
/// The indexer reads the type's own registration through [`HasRegistrationAnnotations`] and
/// then walks [`TypeNode::members`]. Nested types are not part of this contract; callers
/// flatten them into the sequence handed to the indexer.
pub trait TypeNode: HasRegistrationAnnotations {
    /// Member representation of this graph
    type Member: HasRegistrationAnnotations;

    /// Token of the type definition
    fn token(&self) -> Token;

    /// Namespace-qualified .NET name, used for diagnostics
    fn full_name(&self) -> String;

    /// Every member of the type across all member kinds
    fn members(&self) -> impl Iterator<Item = (MemberKind, &Self::Member)>;
}

/// A field, property, event or method definition
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberDef {
    /// Metadata token of the member
    #[cfg_attr(feature = "serde", serde(default))]
    pub token: Token,
    /// .NET name of the member
    pub name: String,
    /// Attributes attached to the member
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom_attributes: Vec<CustomAttribute>,
}

impl MemberDef {
    /// Creates a member without attributes
    #[must_use]
    pub fn new(token: Token, name: &str) -> Self {
        MemberDef {
            token,
            name: name.to_string(),
            custom_attributes: Vec::new(),
        }
    }

    /// Adds a custom attribute
    #[must_use]
    pub fn with_attribute(mut self, attribute: CustomAttribute) -> Self {
        self.custom_attributes.push(attribute);
        self
    }
}

impl HasRegistrationAnnotations for MemberDef {
    fn custom_attributes(&self) -> &[CustomAttribute] {
        &self.custom_attributes
    }
}

/// A type definition with its members and nested types
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TypeDef {
    /// Metadata token of the type
    pub token: Token,
    /// Namespace, empty for nested types and the global namespace
    pub namespace: String,
    /// Simple name
    pub name: String,
    /// Attributes attached to the type itself
    pub custom_attributes: Vec<CustomAttribute>,
    /// Fields
    pub fields: Vec<MemberDef>,
    /// Properties
    pub properties: Vec<MemberDef>,
    /// Events
    pub events: Vec<MemberDef>,
    /// Methods
    pub methods: Vec<MemberDef>,
    /// Types declared inside this one
    pub nested_types: Vec<TypeDef>,
}

impl TypeDef {
    /// Creates an empty type definition
    #[must_use]
    pub fn new(token: Token, namespace: &str, name: &str) -> Self {
        TypeDef {
            token,
            namespace: namespace.to_string(),
            name: name.to_string(),
            ..TypeDef::default()
        }
    }

    /// Adds a custom attribute to the type itself
    #[must_use]
    pub fn with_attribute(mut self, attribute: CustomAttribute) -> Self {
        self.custom_attributes.push(attribute);
        self
    }

    /// Adds a member of the given kind
    #[must_use]
    pub fn with_member(mut self, kind: MemberKind, member: MemberDef) -> Self {
        match kind {
            MemberKind::Field => self.fields.push(member),
            MemberKind::Property => self.properties.push(member),
            MemberKind::Event => self.events.push(member),
            MemberKind::Method => self.methods.push(member),
        }
        self
    }

    /// Adds a nested type
    #[must_use]
    pub fn with_nested(mut self, nested: TypeDef) -> Self {
        self.nested_types.push(nested);
        self
    }

    /// This type followed by all of its nested types, depth first
    #[must_use]
    pub fn flatten(&self) -> Vec<&TypeDef> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into<'a>(&'a self, out: &mut Vec<&'a TypeDef>) {
        out.push(self);
        for nested in &self.nested_types {
            nested.flatten_into(out);
        }
    }
}

impl HasRegistrationAnnotations for TypeDef {
    fn custom_attributes(&self) -> &[CustomAttribute] {
        &self.custom_attributes
    }
}

impl TypeNode for TypeDef {
    type Member = MemberDef;

    fn token(&self) -> Token {
        self.token
    }

    fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    fn members(&self) -> impl Iterator<Item = (MemberKind, &MemberDef)> {
        tagged(MemberKind::Event, &self.events)
            .chain(tagged(MemberKind::Field, &self.fields))
            .chain(tagged(MemberKind::Property, &self.properties))
            .chain(tagged(MemberKind::Method, &self.methods))
    }
}

fn tagged(kind: MemberKind, members: &[MemberDef]) -> impl Iterator<Item = (MemberKind, &MemberDef)> {
    members.iter().map(move |member| (kind, member))
}

/// A module and its top-level types
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModuleDef {
    /// Module file name
    pub name: String,
    /// Top-level types; nested types hang off their declaring type
    pub types: Vec<TypeDef>,
}

/// An assembly and its modules
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AssemblyDef {
    /// Simple assembly name, e.g. `Mono.Android`
    pub name: String,
    /// Modules of the assembly
    pub modules: Vec<ModuleDef>,
}

/// The binding assemblies referenced by an application
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MetadataGraph {
    /// Loaded assemblies
    pub assemblies: Vec<AssemblyDef>,
}

impl MetadataGraph {
    /// Every type of every assembly not named in `excluded`, nested types flattened in
    ///
    /// # Example
    ///
    /// ```rust
    /// use jniscope::metadata::{AssemblyDef, MetadataGraph, ModuleDef, Token, TypeDef};
    ///
    /// let outer = TypeDef::new(Token::new(0x0200_0002), "Demo", "Outer")
    ///     .with_nested(TypeDef::new(Token::new(0x0200_0003), "", "Inner"));
    /// let graph = MetadataGraph {
    ///     assemblies: vec![AssemblyDef {
    ///         name: "Demo.Bindings".to_string(),
    ///         modules: vec![ModuleDef { name: "Demo.Bindings.dll".to_string(), types: vec![outer] }],
    ///     }],
    /// };
    ///
    /// let names: Vec<_> = graph.binding_types(&["Mono.Android"]).map(|t| t.name.as_str()).collect();
    /// assert_eq!(names, ["Outer", "Inner"]);
    /// ```
    pub fn binding_types<'a, S: AsRef<str>>(
        &'a self,
        excluded: &'a [S],
    ) -> impl Iterator<Item = &'a TypeDef> + 'a {
        self.assemblies
            .iter()
            .filter(move |assembly| {
                !excluded
                    .iter()
                    .any(|name| name.as_ref() == assembly.name.as_str())
            })
            .flat_map(|assembly| assembly.modules.iter())
            .flat_map(|module| module.types.iter())
            .flat_map(TypeDef::flatten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::REGISTER_ATTRIBUTE;

    fn member(row: u32, kind: MemberKind, name: &str) -> MemberDef {
        MemberDef::new(Token::from_parts(kind.table(), row), name)
    }

    #[test]
    fn members_cover_all_kinds() {
        let def = TypeDef::new(Token::from_parts(Token::TYPE_DEF, 1), "Demo", "Widget")
            .with_member(MemberKind::Method, member(1, MemberKind::Method, "Draw"))
            .with_member(MemberKind::Field, member(1, MemberKind::Field, "size"))
            .with_member(MemberKind::Event, member(1, MemberKind::Event, "Click"))
            .with_member(MemberKind::Property, member(1, MemberKind::Property, "Text"));

        let kinds: Vec<_> = def.members().map(|(kind, m)| (kind, m.name.as_str())).collect();
        assert_eq!(
            kinds,
            vec![
                (MemberKind::Event, "Click"),
                (MemberKind::Field, "size"),
                (MemberKind::Property, "Text"),
                (MemberKind::Method, "Draw"),
            ]
        );
        assert_eq!(def.full_name(), "Demo.Widget");
    }

    #[test]
    fn flatten_is_depth_first() {
        let def = TypeDef::new(Token::new(1), "N", "A")
            .with_nested(TypeDef::new(Token::new(2), "", "B").with_nested(TypeDef::new(
                Token::new(3),
                "",
                "C",
            )))
            .with_nested(TypeDef::new(Token::new(4), "", "D"));

        let names: Vec<_> = def.flatten().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(def.nested_types[0].full_name(), "B");
    }

    #[test]
    fn binding_types_skips_excluded_assemblies() {
        let assembly = |name: &str, type_name: &str| AssemblyDef {
            name: name.to_string(),
            modules: vec![ModuleDef {
                name: format!("{name}.dll"),
                types: vec![TypeDef::new(Token::new(1), "", type_name)],
            }],
        };
        let graph = MetadataGraph {
            assemblies: vec![
                assembly(MONO_ANDROID_ASSEMBLY, "View"),
                assembly("Bindings", "Widget"),
            ],
        };

        let kept: Vec<_> = graph
            .binding_types(&[MONO_ANDROID_ASSEMBLY])
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(kept, vec!["Widget"]);

        let none: [&str; 0] = [];
        assert_eq!(graph.binding_types(&none).count(), 2);
    }

    #[test]
    fn member_kind_flags() {
        let methods_only = MemberKinds::METHODS;
        assert!(methods_only.includes(MemberKind::Method));
        assert!(!methods_only.includes(MemberKind::Field));
        assert_eq!(MemberKinds::default(), MemberKinds::all());
        assert_eq!(MemberKind::Property.to_string(), "property");
    }

    #[test]
    fn member_attributes() {
        let m = member(3, MemberKind::Field, "x")
            .with_attribute(crate::metadata::CustomAttribute::register("x", None));
        assert_eq!(m.registrations(REGISTER_ATTRIBUTE).count(), 1);
        assert_eq!(m.token.table(), Token::FIELD);
    }
}
