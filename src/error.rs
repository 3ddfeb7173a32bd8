use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($descriptor:expr, $position:expr, $msg:expr) => {
        crate::Error::MalformedDescriptor {
            descriptor: $descriptor.to_string(),
            position: $position,
            message: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($descriptor:expr, $position:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::MalformedDescriptor {
            descriptor: $descriptor.to_string(),
            position: $position,
            message: format!($fmt, $($arg)*),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Crawling a metadata graph never fails: types and registrations that carry nothing usable are
/// skipped. Failures only surface once collected descriptors are decoded, or when the rendered
/// rule document is written out.
///
/// # Examples
///
/// ```rust
/// use jniscope::{descriptor::decode_member, Error};
///
/// match decode_member("foo", "(Ljava/lang/String") {
///     Ok(line) => println!("{line}"),
///     Err(Error::MalformedDescriptor { descriptor, position, message }) => {
///         eprintln!("bad descriptor {descriptor:?} at {position}: {message}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A compact type or method descriptor could not be decoded.
    ///
    /// Raised when the descriptor does not follow the grammar, ends before a rule completes,
    /// or still has characters left after one complete descriptor was read.
    ///
    /// # Fields
    ///
    /// * `descriptor` - The full descriptor text that failed to decode
    /// * `position` - Character offset at which decoding gave up
    /// * `message` - What the decoder expected at that offset
    #[error("Malformed descriptor {descriptor:?} at offset {position}: {message}")]
    MalformedDescriptor {
        /// The descriptor that was being decoded
        descriptor: String,
        /// Character offset of the failure
        position: usize,
        /// Description of the failure
        message: String,
    },

    /// I/O error while writing rendered keep rules.
    #[error("{0}")]
    FileError(#[from] std::io::Error),
}
