use crate::{
    descriptor::{JniMethod, JniPrimitive, JniType},
    Result,
};

/// Maximum nesting depth for descriptor parsing
///
/// Comfortably above the 255 array dimensions the JVM allows, even inside a parameter list.
pub const MAX_RECURSION_DEPTH: usize = 512;

/// Cursor-based recursive-descent parser for compact JNI descriptors
///
/// # Example
///
/// ```rust
/// use jniscope::descriptor::{DescriptorParser, JniType};
///
/// let mut parser = DescriptorParser::new("[ILjava/lang/String;");
/// let first = parser.parse_type()?;
/// let second = parser.parse_type()?;
/// assert_eq!(first.to_string(), "int[]");
/// assert_eq!(second, JniType::Class("java.lang.String".to_string()));
/// assert!(!parser.has_more_data());
/// # Ok::<(), jniscope::Error>(())
/// ```
///
/// ## Notes:
/// - `parse_type` reads exactly one descriptor and leaves the cursor behind it; use
///   [`crate::descriptor::parse_descriptor`] to require that a string holds exactly one.
pub struct DescriptorParser<'a> {
    input: &'a str,
    position: usize,
    depth: usize,
}

impl<'a> DescriptorParser<'a> {
    /// Create a new `DescriptorParser` over a descriptor string
    ///
    /// ## Arguments
    /// * 'input' - The descriptor text to read from
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        DescriptorParser {
            input,
            position: 0,
            depth: 0,
        }
    }

    /// Current byte offset into the descriptor
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if characters remain after the cursor
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Result<char> {
        match self.peek() {
            Some(c) => {
                self.position += c.len_utf8();
                Ok(c)
            }
            None => Err(malformed_error!(
                self.input,
                self.position,
                "unexpected end of descriptor"
            )),
        }
    }

    /// Parse a single descriptor at the cursor
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedDescriptor`] on an unknown tag, on input that ends
    /// before the descriptor is complete, or when nesting exceeds [`MAX_RECURSION_DEPTH`].
    pub fn parse_type(&mut self) -> Result<JniType> {
        self.depth += 1;
        if self.depth > MAX_RECURSION_DEPTH {
            return Err(malformed_error!(
                self.input,
                self.position,
                "nesting exceeds {} levels",
                MAX_RECURSION_DEPTH
            ));
        }

        let start = self.position;
        let tag = self.next_char()?;
        let parsed = match tag {
            '(' => JniType::Method(self.parse_method_body()?),
            '[' => JniType::Array(Box::new(self.parse_type()?)),
            'L' => JniType::Class(self.parse_class_name()?),
            _ => match JniPrimitive::from_tag(tag) {
                Some(primitive) => JniType::Primitive(primitive),
                None => {
                    return Err(malformed_error!(
                        self.input,
                        start,
                        "unknown type tag '{}'",
                        tag
                    ))
                }
            },
        };

        self.depth -= 1;
        Ok(parsed)
    }

    /// Parse parameters up to `)` and then the return type; the `(` is already consumed
    fn parse_method_body(&mut self) -> Result<JniMethod> {
        let mut params = Vec::new();
        loop {
            match self.peek() {
                Some(')') => {
                    self.position += 1;
                    break;
                }
                Some(_) => params.push(self.parse_type()?),
                None => {
                    return Err(malformed_error!(
                        self.input,
                        self.position,
                        "parameter list is not closed"
                    ))
                }
            }
        }

        Ok(JniMethod {
            params,
            return_type: Box::new(self.parse_type()?),
        })
    }

    /// Read a class name up to and including `;`, the `L` is already consumed
    fn parse_class_name(&mut self) -> Result<String> {
        let mut name = String::new();
        loop {
            match self.peek() {
                Some(';') => {
                    self.position += 1;
                    return Ok(name);
                }
                Some(c) => {
                    self.position += c.len_utf8();
                    name.push(if c == '/' { '.' } else { c });
                }
                None => {
                    return Err(malformed_error!(
                        self.input,
                        self.position,
                        "class name is missing its terminating ';'"
                    ))
                }
            }
        }
    }
}
