//! Decoded descriptor types and their Java-style rendering.
//!
//! A [`JniType`] is the result of parsing one compact descriptor. Rendering is done through
//! [`Declaration`], which attaches an optional member name so the same type can be printed as a
//! bare parameter type (`int[]`), a named field (`int[] values`) or a full method declaration
//! (`void onClick(android.view.View)`).

use std::fmt;

use strum::{Display, EnumIter};

/// Literal name the .NET runtime gives instance constructors.
pub const CONSTRUCTOR_NAME: &str = ".ctor";

/// Name the Java side uses when referring to a constructor.
pub const CONSTRUCTOR_TOKEN: &str = "<init>";

/// Maps the .NET constructor pseudo-name onto the Java constructor token.
///
/// Every other name is returned unchanged.
///
/// # Example
///
/// ```rust
/// use jniscope::descriptor::normalize_member_name;
///
/// assert_eq!(normalize_member_name(".ctor"), "<init>");
/// assert_eq!(normalize_member_name("onClick"), "onClick");
/// ```
#[must_use]
pub fn normalize_member_name(name: &str) -> &str {
    if name == CONSTRUCTOR_NAME {
        CONSTRUCTOR_TOKEN
    } else {
        name
    }
}

/// The nine single-character primitive tags of the descriptor grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum JniPrimitive {
    /// `V`
    Void,
    /// `Z`
    Boolean,
    /// `B`
    Byte,
    /// `C`
    Char,
    /// `S`
    Short,
    /// `I`
    Int,
    /// `J`
    Long,
    /// `F`
    Float,
    /// `D`
    Double,
}

impl JniPrimitive {
    /// Looks up the primitive for a descriptor tag character.
    #[must_use]
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'V' => Some(JniPrimitive::Void),
            'Z' => Some(JniPrimitive::Boolean),
            'B' => Some(JniPrimitive::Byte),
            'C' => Some(JniPrimitive::Char),
            'S' => Some(JniPrimitive::Short),
            'I' => Some(JniPrimitive::Int),
            'J' => Some(JniPrimitive::Long),
            'F' => Some(JniPrimitive::Float),
            'D' => Some(JniPrimitive::Double),
            _ => None,
        }
    }

    /// Returns the descriptor tag character of this primitive.
    #[must_use]
    pub fn tag(self) -> char {
        match self {
            JniPrimitive::Void => 'V',
            JniPrimitive::Boolean => 'Z',
            JniPrimitive::Byte => 'B',
            JniPrimitive::Char => 'C',
            JniPrimitive::Short => 'S',
            JniPrimitive::Int => 'I',
            JniPrimitive::Long => 'J',
            JniPrimitive::Float => 'F',
            JniPrimitive::Double => 'D',
        }
    }
}

/// Parameter list and return type of a method descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JniMethod {
    /// Parameter types, in declaration order
    pub params: Vec<JniType>,
    /// Return type, `void` included
    pub return_type: Box<JniType>,
}

/// One decoded descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JniType {
    /// A primitive such as `int` or `void`
    Primitive(JniPrimitive),
    /// Array of the boxed element type
    Array(Box<JniType>),
    /// A class, already converted to its dotted name (`java.lang.String`)
    Class(String),
    /// A method signature
    Method(JniMethod),
}

impl JniType {
    /// Returns true if this is the `void` primitive
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self, JniType::Primitive(JniPrimitive::Void))
    }

    /// Attaches a member name for rendering.
    ///
    /// With `None`, the type renders the way it appears inside a parameter list.
    #[must_use]
    pub fn declaration<'a>(&'a self, name: Option<&'a str>) -> Declaration<'a> {
        Declaration { ty: self, name }
    }
}

impl fmt::Display for JniType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.declaration(None), f)
    }
}

/// A [`JniType`] paired with an optional member name, rendered as a Java declaration.
///
/// Methods print their return type, then the name, then the parameter list. The return type
/// is left out only for a `void` method named [`CONSTRUCTOR_TOKEN`]. Any other kind of type
/// prints as `<type> <name>`, or just `<type>` when there is no name.
#[derive(Debug, Clone, Copy)]
pub struct Declaration<'a> {
    ty: &'a JniType,
    name: Option<&'a str>,
}

impl fmt::Display for Declaration<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            JniType::Primitive(primitive) => write!(f, "{primitive}")?,
            JniType::Array(element) => write!(f, "{element}[]")?,
            JniType::Class(class) => f.write_str(class)?,
            JniType::Method(method) => {
                if !(method.return_type.is_void() && self.name == Some(CONSTRUCTOR_TOKEN)) {
                    write!(f, "{} ", method.return_type)?;
                }
                if let Some(name) = self.name {
                    f.write_str(name)?;
                }
                f.write_str("(")?;
                for (index, param) in method.params.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{param}")?;
                }
                return f.write_str(")");
            }
        }

        match self.name {
            Some(name) => write!(f, " {name}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn primitive_tags_round_trip() {
        for primitive in JniPrimitive::iter() {
            assert_eq!(JniPrimitive::from_tag(primitive.tag()), Some(primitive));
        }
        assert_eq!(JniPrimitive::from_tag('L'), None);
        assert_eq!(JniPrimitive::from_tag('['), None);
    }

    #[test]
    fn primitive_names() {
        assert_eq!(JniPrimitive::Boolean.to_string(), "boolean");
        assert_eq!(JniPrimitive::Long.to_string(), "long");
        assert_eq!(JniPrimitive::Void.to_string(), "void");
    }

    #[test]
    fn named_declarations() {
        let array = JniType::Array(Box::new(JniType::Class("java.lang.String".into())));
        assert_eq!(array.to_string(), "java.lang.String[]");
        assert_eq!(
            array.declaration(Some("names")).to_string(),
            "java.lang.String[] names"
        );

        let int = JniType::Primitive(JniPrimitive::Int);
        assert_eq!(int.declaration(Some("count")).to_string(), "int count");
    }

    #[test]
    fn constructor_drops_void_only() {
        let ctor = JniType::Method(JniMethod {
            params: vec![JniType::Primitive(JniPrimitive::Int)],
            return_type: Box::new(JniType::Primitive(JniPrimitive::Void)),
        });
        assert_eq!(
            ctor.declaration(Some(CONSTRUCTOR_TOKEN)).to_string(),
            "<init>(int)"
        );
        assert_eq!(ctor.declaration(Some("reset")).to_string(), "void reset(int)");
        assert_eq!(ctor.to_string(), "void (int)");

        let odd = JniType::Method(JniMethod {
            params: Vec::new(),
            return_type: Box::new(JniType::Primitive(JniPrimitive::Int)),
        });
        assert_eq!(odd.declaration(Some(CONSTRUCTOR_TOKEN)).to_string(), "int <init>()");
    }

    #[test]
    fn normalizes_only_the_constructor_name() {
        assert_eq!(normalize_member_name(CONSTRUCTOR_NAME), CONSTRUCTOR_TOKEN);
        assert_eq!(normalize_member_name("<init>"), "<init>");
        assert_eq!(normalize_member_name(".cctor"), ".cctor");
    }
}
