//! ProGuard keep-rule rendering.
//!
//! Turns the result of a crawl into the configuration text handed to ProGuard. The document
//! starts with three fixed rules that retain generated resource classes, the Mono runtime
//! classes and every Android callable wrapper, followed by one `-keep class` rule per indexed
//! type:
//!
//! ```text
//! -keepclassmembers class **.R$* {
//! 	public static <fields>;
//! }
//! -keep class mono.** { *; }
//! -keep class * implements mono.android.IGCUserPeer { *; }
//! -keep class android.view.View {
//! 	void onClick(android.view.View);
//! }
//! ```
//!
//! A type without members gets a bare `-keep class <name>` line. Otherwise a `<fields>;` line
//! is emitted first when any member lacks a signature, then one line per decoded member.
//!
//! # Examples
//!
//! ```rust
//! use jniscope::{
//!     indexer::{IndexedType, RegisteredMember},
//!     keep::KeepRules,
//! };
//!
//! let mut view = IndexedType::new("android/view/View");
//! view.insert(RegisteredMember::new("onClick", Some("(Landroid/view/View;)V")));
//!
//! let text = KeepRules::new(&[view]).with_preamble(false).render()?;
//! assert_eq!(text, "-keep class android.view.View {\n\tvoid onClick(android.view.View);\n}\n");
//! # Ok::<(), jniscope::Error>(())
//! ```

use std::io::Write;

use log::debug;

use crate::{indexer::IndexedType, Result};

/// Rules emitted ahead of every discovered type
pub const PREAMBLE: &str = "\
-keepclassmembers class **.R$* {
\tpublic static <fields>;
}
-keep class mono.** { *; }
-keep class * implements mono.android.IGCUserPeer { *; }
";

/// Renders indexed types as a ProGuard configuration document
#[derive(Debug, Clone, Copy)]
pub struct KeepRules<'a> {
    types: &'a [IndexedType],
    preamble: bool,
}

impl<'a> KeepRules<'a> {
    /// Creates a renderer over crawl results, preamble included
    #[must_use]
    pub fn new(types: &'a [IndexedType]) -> Self {
        KeepRules {
            types,
            preamble: true,
        }
    }

    /// Turns the fixed preamble rules on or off
    ///
    /// ProGuard needs them for a working Xamarin.Android build; leave them on unless the
    /// output is merged into a document that already has them.
    #[must_use]
    pub fn with_preamble(mut self, preamble: bool) -> Self {
        self.preamble = preamble;
        self
    }

    /// Renders the whole document
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedDescriptor`] for the first member whose signature does
    /// not decode.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        if self.preamble {
            out.push_str(PREAMBLE);
        }

        for ty in self.types {
            render_type(ty, &mut out)?;
        }

        debug!("rendered keep rules for {} types", self.types.len());
        Ok(out)
    }

    /// Renders the document and writes it to `writer`
    ///
    /// Nothing is written if decoding fails.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedDescriptor`] on a bad signature, or
    /// [`crate::Error::FileError`] if writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let rendered = self.render()?;
        writer.write_all(rendered.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

fn render_type(ty: &IndexedType, out: &mut String) -> Result<()> {
    out.push_str("-keep class ");
    out.push_str(&ty.java_name());

    if !ty.is_empty() {
        out.push_str(" {\n");

        if ty.has_plain_members() {
            out.push_str("\t<fields>;\n");
        }

        for member in ty.signed_members() {
            if let Some(declaration) = member.decode()? {
                out.push('\t');
                out.push_str(&declaration);
                out.push_str(";\n");
            }
        }

        out.push('}');
    }

    out.push('\n');
    Ok(())
}
