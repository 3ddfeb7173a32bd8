//! Custom attribute values and registration extraction.
//!
//! Java bindings mark both the bound type and each bound member with a registration attribute
//! (`Android.Runtime.RegisterAttribute` by default). Its first constructor argument is the Java
//! name, the optional second one the compact JNI signature. This module holds the decoded form
//! of such attributes and the [`HasRegistrationAnnotations`] capability that lets any metadata
//! representation expose them to the indexer.

use log::warn;

/// Full name of the attribute Java bindings use to register types and members
pub const REGISTER_ATTRIBUTE: &str = "Android.Runtime.RegisterAttribute";

/// One fixed constructor argument of a custom attribute
///
/// Only the variants a registration can meaningfully carry are modelled; anything a loader
/// cannot express with them should be mapped to [`AttributeArgument::Null`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttributeArgument {
    /// Null reference
    Null,
    /// Boolean value
    Bool(bool),
    /// Any integral value
    Int(i64),
    /// String value
    String(String),
}

impl AttributeArgument {
    /// Returns the string payload, if this is a string argument
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeArgument::String(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for AttributeArgument {
    fn from(value: &str) -> Self {
        AttributeArgument::String(value.to_string())
    }
}

/// A custom attribute attached to a type or member
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomAttribute {
    /// Full name of the attribute type, e.g. `Android.Runtime.RegisterAttribute`
    pub attribute_type: String,
    /// Fixed constructor arguments, in order
    #[cfg_attr(feature = "serde", serde(default))]
    pub fixed_args: Vec<AttributeArgument>,
}

impl CustomAttribute {
    /// Creates an attribute of the given type with the given fixed arguments
    #[must_use]
    pub fn new(attribute_type: &str, fixed_args: Vec<AttributeArgument>) -> Self {
        CustomAttribute {
            attribute_type: attribute_type.to_string(),
            fixed_args,
        }
    }

    /// Creates a [`REGISTER_ATTRIBUTE`] with a name and optional signature
    ///
    /// # Example
    ///
    /// ```rust
    /// use jniscope::metadata::CustomAttribute;
    ///
    /// let attr = CustomAttribute::register("onClick", Some("(Landroid/view/View;)V"));
    /// let registration = attr.registration();
    /// assert_eq!(registration.name, Some("onClick"));
    /// assert_eq!(registration.signature, Some("(Landroid/view/View;)V"));
    /// ```
    #[must_use]
    pub fn register(name: &str, signature: Option<&str>) -> Self {
        let mut fixed_args = vec![AttributeArgument::from(name)];
        if let Some(signature) = signature {
            fixed_args.push(AttributeArgument::from(signature));
        }
        Self::new(REGISTER_ATTRIBUTE, fixed_args)
    }

    /// Reads the name and signature arguments of a registration attribute
    ///
    /// Missing arguments and arguments that are not strings both come back as `None`; the
    /// latter is logged since it points at metadata the loader did not decode as expected.
    #[must_use]
    pub fn registration(&self) -> Registration<'_> {
        Registration {
            name: self.string_arg(0),
            signature: self.string_arg(1),
        }
    }

    fn string_arg(&self, index: usize) -> Option<&str> {
        let arg = self.fixed_args.get(index)?;
        match arg {
            AttributeArgument::String(value) => Some(value),
            AttributeArgument::Null => None,
            other => {
                warn!(
                    "{} argument {} is not a string: {:?}",
                    self.attribute_type, index, other
                );
                None
            }
        }
    }
}

/// Name and signature taken from one registration attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration<'a> {
    /// Java name of the type or member
    pub name: Option<&'a str>,
    /// Compact JNI signature; absent for types, fields, properties and events
    pub signature: Option<&'a str>,
}

/// Capability of a metadata node to expose its custom attributes
///
/// Implement this for whatever type and member representation a loader produces; the indexer
/// only ever reads registrations through it.
pub trait HasRegistrationAnnotations {
    /// All custom attributes attached to this node
    fn custom_attributes(&self) -> &[CustomAttribute];

    /// Registrations from every attribute whose full type name equals `attribute_type`
    fn registrations<'a>(&'a self, attribute_type: &str) -> impl Iterator<Item = Registration<'a>> {
        self.custom_attributes()
            .iter()
            .filter(move |attribute| attribute.attribute_type == attribute_type)
            .map(CustomAttribute::registration)
    }
}
