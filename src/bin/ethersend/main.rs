// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

#![cfg_attr(feature = "strict", deny(warnings))]
#![deny(clippy::all)]

mod args;

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::args::ProgramArguments;
use ::anyhow::Result;
use ::ethersend::{
    runtime::logging,
    FrameSender,
    PlatformLinkLayer,
    SenderConfig,
};

//======================================================================================================================
// Main
//======================================================================================================================

/// Drives the application.
fn main() -> Result<()> {
    let args: ProgramArguments = ProgramArguments::new(
        "ethersend",
        "Microsoft Corporation",
        "Floods an interface with a fixed raw Ethernet frame.",
    )?;

    logging::initialize()?;

    let config: SenderConfig = SenderConfig::new(args.get_interface());
    let sender: FrameSender<PlatformLinkLayer> = FrameSender::new(PlatformLinkLayer);
    if let Err(e) = sender.run(&config) {
        anyhow::bail!("failed to send frames over {:?}: {}", config.interface(), e);
    }

    Ok(())
}
