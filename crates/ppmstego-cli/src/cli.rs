use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use log::warn;
use ppmstego_core::{CodecOptions, MalformedSamplePolicy};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Fail on malformed pixel samples instead of reading them as 0
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            malformed_sample: if self.strict {
                MalformedSamplePolicy::Reject
            } else {
                MalformedSamplePolicy::Zero
            },
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Reveal(reveal::RevealArgs),
}

/// Prompts for the numeric secret when it was not passed as an argument.
pub fn ask_for_secret() -> Option<u64> {
    let input = Password::new()
        .with_prompt("Secret (a positive number)")
        .interact()
        .ok()?;
    match input.trim().parse() {
        Ok(secret) => Some(secret),
        Err(_) => {
            warn!("the secret must be a positive number");
            None
        }
    }
}

/// Prompts for the message to hide when it was not passed as an argument.
pub fn ask_for_message() -> Option<String> {
    Input::new().with_prompt("Message").interact_text().ok()
}
