use std::path::PathBuf;

use clap::Args;
use ppmstego_core::CodecOptions;

use crate::cli::ask_for_secret;
use crate::CliResult;

/// Reveals the text message hidden in a plain PPM (P3) image
#[derive(Args, Debug)]
pub struct RevealArgs {
    /// Source image that contains the hidden message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub image: PathBuf,

    /// Numeric secret the message was hidden with; prompted for when absent
    #[arg(short, long, value_name = "secret")]
    pub secret: Option<u64>,
}

impl RevealArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let secret = self.secret.or_else(ask_for_secret);

        let message = ppmstego_core::api::reveal::prepare()
            .with_options(options)
            .from_secret_file(&self.image)
            .use_secret(secret)
            .execute()?;

        println!("{message}");
        Ok(())
    }
}
