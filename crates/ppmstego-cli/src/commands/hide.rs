use std::path::PathBuf;

use clap::Args;
use ppmstego_core::CodecOptions;

use crate::cli::{ask_for_message, ask_for_secret};
use crate::CliResult;

/// Hides a text message in a plain PPM (P3) image
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Plain PPM (P3) carrier image, used readonly
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Image with the hidden message will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Numeric secret shared with the revealing side; prompted for when absent
    #[arg(short, long, value_name = "secret")]
    pub secret: Option<u64>,

    /// A text message that will be hidden; prompted for when absent
    #[arg(short, long, value_name = "text message")]
    pub message: Option<String>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let secret = self.secret.or_else(ask_for_secret);
        let message = self.message.or_else(ask_for_message);

        ppmstego_core::api::hide::prepare()
            .with_options(options)
            .with_image(&self.image)
            .with_output(&self.write_to_file)
            .use_secret(secret)
            .use_message(message)
            .execute()
    }
}
