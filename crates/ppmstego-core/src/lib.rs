//! # Ppmstego Core API
//!
//! Hides a line of text inside a plain PPM (P3) image and recovers it
//! again, keyed by a shared numeric secret. The message bits are spread
//! over the least significant bits of the color channels along a pixel
//! traversal whose step size is derived deterministically from the secret,
//! so both sides reproduce the exact same visiting order.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let marked = temp_dir.path().join("image-with-a-message-inside.ppm");
//!
//! ppmstego_core::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_secret(1337)
//!     .with_image("tests/images/gradient.ppm")
//!     .with_output(&marked)
//!     .execute()
//!     .expect("Failed to hide message in image");
//! ```
//!
//! ## Reveal a message from an image
//!
//! ```rust
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let marked = temp_dir.path().join("image-with-a-message-inside.ppm");
//! # ppmstego_core::api::hide::prepare()
//! #     .with_message("Hello, World!")
//! #     .with_secret(1337)
//! #     .with_image("tests/images/gradient.ppm")
//! #     .with_output(&marked)
//! #     .execute()
//! #     .expect("Failed to hide message in image");
//!
//! let message = ppmstego_core::api::reveal::prepare()
//!     .from_secret_file(&marked)
//!     .using_secret(1337)
//!     .execute()
//!     .expect("Failed to reveal message from image");
//!
//! assert_eq!(message, "Hello, World!");
//! ```

pub mod api;
pub mod commands;
pub mod error;
pub mod lsb;
pub mod ppm;
pub mod result;
pub mod stride;

pub use crate::error::StegoError;
pub use crate::lsb::{LsbCodec, SENTINEL};
pub use crate::ppm::{CodecOptions, MalformedSamplePolicy, PpmImage, Rgb};
pub use crate::result::Result;
pub use crate::stride::stride_of;
