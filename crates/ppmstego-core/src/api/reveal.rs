use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StegoError;
use crate::lsb::LsbCodec;
use crate::ppm::{CodecOptions, PpmImage};
use crate::result::Result;

pub fn prepare() -> RevealApi {
    RevealApi::default()
}

#[derive(Default, Debug)]
pub struct RevealApi {
    secret_image: Option<PathBuf>,
    secret: Option<u64>,
    options: CodecOptions,
}

impl RevealApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// The image that carries the hidden message.
    pub fn from_secret_file<A: AsRef<Path>>(mut self, secret_image: A) -> Self {
        self.secret_image = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// Set the numeric secret the message was hidden with.
    pub fn using_secret(mut self, secret: u64) -> Self {
        self.secret = Some(secret);
        self
    }

    pub fn use_secret(mut self, secret: Option<u64>) -> Self {
        self.secret = secret;
        self
    }

    pub fn execute(self) -> Result<String> {
        let Some(secret_image) = self.secret_image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(secret) = self.secret else {
            return Err(StegoError::MissingSecret);
        };
        if secret == 0 {
            return Err(StegoError::InvalidSecret);
        }

        let raw = fs::read(&secret_image).map_err(|source| StegoError::ReadError { source })?;
        let image = PpmImage::parse_with_options(&raw, &self.options)?;
        let message = LsbCodec::extract(&image, secret)?;

        // a wrong secret usually runs the traversal off the grid; when it
        // does not, the recovered bytes are garbage and decoded lossily
        Ok(String::from_utf8_lossy(&message).into_owned())
    }
}
