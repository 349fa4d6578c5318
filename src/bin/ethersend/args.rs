// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use ::anyhow::Result;
use ::clap::{
    Arg,
    ArgMatches,
    Command,
};

//======================================================================================================================
// Program Arguments
//======================================================================================================================

/// Program Arguments
#[derive(Debug)]
pub struct ProgramArguments {
    /// Name of the network interface to transmit on.
    interface: String,
}

/// Associate functions for Program Arguments
impl ProgramArguments {
    /// Parses the program arguments from the command line interface.
    pub fn new(app_name: &'static str, app_author: &'static str, app_about: &'static str) -> Result<Self> {
        let matches: ArgMatches = Self::command(app_name, app_author, app_about).get_matches();
        Self::from_matches(&matches)
    }

    /// Returns the network interface name stored in the target program arguments.
    pub fn get_interface(&self) -> &str {
        &self.interface
    }

    fn command(app_name: &'static str, app_author: &'static str, app_about: &'static str) -> Command {
        Command::new(app_name).author(app_author).about(app_about).arg(
            Arg::new("interface")
                .value_parser(clap::value_parser!(String))
                .required(true)
                .index(1)
                .value_name("INTERFACE")
                .help("Sets the network interface to transmit on"),
        )
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let interface: String = matches
            .get_one::<String>("interface")
            .ok_or_else(|| anyhow::anyhow!("missing interface name"))?
            .to_string();

        if interface.is_empty() {
            anyhow::bail!("invalid interface name");
        }

        Ok(Self { interface })
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
