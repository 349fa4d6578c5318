// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

pub mod ethernet2;
pub mod types;

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::fail::Fail;

//======================================================================================================================
// Traits
//======================================================================================================================

/// An open link-layer endpoint that transmits complete Ethernet frames. Dropping the endpoint releases it.
pub trait LinkLayer {
    /// Transmits `frame` as a single link-layer transmission and returns the number of bytes accepted.
    fn transmit(&mut self, frame: &[u8]) -> Result<usize, Fail>;
}

/// Opens link-layer endpoints bound to a network interface.
pub trait LinkLayerProvider {
    type Endpoint: LinkLayer;

    /// Opens an endpoint bound to the network interface named `ifname`.
    fn open(&self, ifname: &str) -> Result<Self::Endpoint, Fail>;
}
