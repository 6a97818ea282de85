use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StegoError;
use crate::lsb::{LsbCodec, SENTINEL};
use crate::ppm::{CodecOptions, PpmImage};
use crate::result::Result;

/// Longest accepted message, in bytes, not counting the terminator.
pub const MAX_MESSAGE_LEN: usize = 255;

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    secret: Option<u64>,
    message: Option<String>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// The plain PPM carrier image, used readonly.
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The image with the hidden message will be written here.
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the numeric secret shared with the revealing side.
    pub fn with_secret(mut self, secret: u64) -> Self {
        self.secret = Some(secret);
        self
    }

    pub fn use_secret(mut self, secret: Option<u64>) -> Self {
        self.secret = secret;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn execute(self) -> Result<()> {
        self.validate()?;
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };
        let Some(secret) = self.secret else {
            return Err(StegoError::MissingSecret);
        };
        let Some(message) = self.message else {
            return Err(StegoError::MissingMessage);
        };

        let raw = fs::read(&image).map_err(|source| StegoError::ReadError { source })?;
        let carrier = PpmImage::parse_with_options(&raw, &self.options)?;

        let mut payload = message.into_bytes();
        payload.push(SENTINEL);

        let marked = LsbCodec::embed(carrier, &payload, secret)?;
        fs::write(&output, marked.to_bytes())
            .map_err(|source| StegoError::WriteError { source })?;

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.secret == Some(0) {
            return Err(StegoError::InvalidSecret);
        }
        if let Some(message) = &self.message {
            if message.len() > MAX_MESSAGE_LEN {
                return Err(StegoError::MessageTooLong {
                    length: message.len(),
                    limit: MAX_MESSAGE_LEN,
                });
            }
            if message.as_bytes().contains(&SENTINEL) {
                return Err(StegoError::SentinelInMessage);
            }
        }
        Ok(())
    }
}
