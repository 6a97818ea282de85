use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a carrier that is not a plain PPM image, for example the binary `P6` flavor
    #[error("Unsupported image format: expected P3, found {found:?}")]
    UnsupportedFormat { found: String },

    /// Represents a header with missing or non-numeric dimension or max-value tokens
    #[error("Malformed image header: {0}")]
    MalformedHeader(String),

    /// Represents a header comment line exceeding the comment size limit
    #[error("Image comment of {length} bytes exceeds the limit of {limit} bytes")]
    CommentTooLong { length: usize, limit: usize },

    /// Represents a pixel section with fewer pixels than the header declares
    #[error("Truncated image: header declares {expected} pixels, found {found}")]
    TruncatedImage { expected: usize, found: usize },

    /// Represents a non-numeric pixel sample rejected under the strict parsing policy
    #[error("Malformed pixel sample {token:?} at pixel {index}")]
    MalformedSample { token: String, index: usize },

    /// Represents a message that cannot fit into the carrier image
    #[error(
        "Capacity exceeded: a message of {required} characters does not fit into an image of {available} pixels"
    )]
    CapacityExceeded { required: usize, available: usize },

    /// Represents a traversal that ran off the pixel grid before the message
    /// terminator was found, typically a wrong secret or an image without a
    /// hidden message
    #[error("Ran off the end of the image before the message terminator was found")]
    ImageExhausted,

    /// Represents a failure to read the carrier image file.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing secret")]
    MissingSecret,

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("The secret must be a positive integer")]
    InvalidSecret,

    #[error("Message of {length} bytes exceeds the limit of {limit}")]
    MessageTooLong { length: usize, limit: usize },

    /// Newline terminates a hidden message, so it cannot appear inside one
    #[error("Message must not contain newline characters")]
    SentinelInMessage,
}
