//! Application configuration initialization command.
//!
//! Runs an interactive wizard for the display settings: currency symbol,
//! default dashboard period and the date format used in record lists.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write the default configuration without prompting
    #[arg(short, long)]
    defaults: bool,
}

/// Executes the initialization command.
///
/// The wizard is pre-filled with the current configuration, so running it
/// again only changes what the user edits.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.defaults { Config::default() } else { Config::init()? };
    config.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
