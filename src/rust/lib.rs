// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

#![cfg_attr(feature = "strict", deny(warnings))]
#![deny(clippy::all)]

#[macro_use]
extern crate log;

pub mod ethersend;
pub mod runtime;

#[cfg(target_os = "linux")]
pub mod catpowder;

pub use self::{
    ethersend::{
        config::SenderConfig,
        FrameSender,
    },
    runtime::{
        fail::{
            Fail,
            FailKind,
        },
        network::{
            ethernet2::Frame,
            types::{
                EtherType,
                MacAddress,
            },
            LinkLayer,
            LinkLayerProvider,
        },
    },
};

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        pub use crate::catpowder::linux::LinuxLinkLayer as PlatformLinkLayer;
    }
}
