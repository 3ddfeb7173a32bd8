//! Compact JNI descriptor decoding.
//!
//! Java binding metadata records method and field types in the JVM's compact descriptor form,
//! for example `(I[Ljava/lang/String;)V`. This module parses such descriptors into [`JniType`]
//! values and renders them as Java declarations suitable for a keep rule:
//!
//! | Descriptor | Meaning |
//! |------------|---------|
//! | `V Z B C S I J F D` | `void boolean byte char short int long float double` |
//! | `[T` | array of `T`, rendered `T[]` |
//! | `Lpkg/Name;` | class, rendered `pkg.Name` |
//! | `(P...)R` | method with parameters `P...` returning `R` |
//!
//! Decoding is strict. The whole string must be exactly one descriptor; anything left over, or
//! missing, is a [`crate::Error::MalformedDescriptor`].
//!
//! # Examples
//!
//! ```rust
//! use jniscope::descriptor::decode_member;
//!
//! assert_eq!(
//!     decode_member("foo", "(I[Ljava/lang/String;)V")?,
//!     "void foo(int, java.lang.String[])"
//! );
//! assert_eq!(decode_member(".ctor", "(I)V")?, "<init>(int)");
//! assert!(decode_member("foo", "I I").is_err());
//! # Ok::<(), jniscope::Error>(())
//! ```

mod parser;
mod types;

pub use parser::{DescriptorParser, MAX_RECURSION_DEPTH};
pub use types::{
    normalize_member_name, Declaration, JniMethod, JniPrimitive, JniType, CONSTRUCTOR_NAME,
    CONSTRUCTOR_TOKEN,
};

use crate::Result;

/// Parse a string holding exactly one descriptor
///
/// # Errors
/// Returns [`crate::Error::MalformedDescriptor`] if the descriptor is invalid, incomplete or
/// followed by further characters.
pub fn parse_descriptor(descriptor: &str) -> Result<JniType> {
    let mut parser = DescriptorParser::new(descriptor);
    let parsed = parser.parse_type()?;
    if parser.has_more_data() {
        return Err(malformed_error!(
            descriptor,
            parser.position(),
            "trailing characters after a complete descriptor"
        ));
    }

    Ok(parsed)
}

/// Render one member as a Java declaration
///
/// `name` is normalized first, so the .NET constructor name `.ctor` prints as `<init>` and a
/// constructor's `void` return type is left out.
///
/// # Errors
/// Returns [`crate::Error::MalformedDescriptor`] if `signature` is not exactly one valid
/// descriptor.
pub fn decode_member(name: &str, signature: &str) -> Result<String> {
    let name = normalize_member_name(name);
    let parsed = parse_descriptor(signature)?;
    Ok(parsed.declaration(Some(name)).to_string())
}
