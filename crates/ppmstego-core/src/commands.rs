//! Path-based one-shot operations, the layer the command line calls.

use std::path::Path;

use crate::ppm::CodecOptions;
use crate::result::Result;

/// Hides `message` in the plain PPM image at `image` and writes the marked
/// image to `output`.
pub fn hide(
    image: &Path,
    output: &Path,
    secret: u64,
    message: &str,
    options: CodecOptions,
) -> Result<()> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(image)
        .with_output(output)
        .with_secret(secret)
        .with_message(message)
        .execute()
}

/// Reveals the message hidden in the plain PPM image at `image`.
pub fn reveal(image: &Path, secret: u64, options: CodecOptions) -> Result<String> {
    crate::api::reveal::prepare()
        .with_options(options)
        .from_secret_file(image)
        .using_secret(secret)
        .execute()
}
