// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::{
    ethersend::config::SenderConfig,
    runtime::{
        fail::Fail,
        network::{
            ethernet2::{
                Ethernet2Header,
                Frame,
            },
            types::{
                EtherType,
                MacAddress,
            },
            LinkLayer,
            LinkLayerProvider,
        },
    },
};

//======================================================================================================================
// Structures
//======================================================================================================================

/// Frame Sender
pub struct FrameSender<P: LinkLayerProvider> {
    /// Link layer used to reach the network interface.
    provider: P,
}

//======================================================================================================================
// Associate Functions
//======================================================================================================================

impl<P: LinkLayerProvider> FrameSender<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Builds the frame `dst ++ src ++ ether_type ++ payload` and transmits it once over the interface named
    /// `ifname`. Arguments are validated before any socket is opened. The socket is released before returning, on
    /// every path.
    pub fn send(&self, ifname: &str, dst: &[u8], src: &[u8], ether_type: &[u8], payload: &[u8]) -> Result<(), Fail> {
        let dst_addr: MacAddress = MacAddress::try_from(dst)?;
        let src_addr: MacAddress = MacAddress::try_from(src)?;
        let ether_type: EtherType = EtherType::try_from(ether_type)?;
        let frame: Frame = build_frame(dst_addr, src_addr, ether_type, payload);

        let mut endpoint: P::Endpoint = self.provider.open(ifname)?;
        transmit_all(&mut endpoint, &frame)
    }

    /// Sends the frame described by `config` `config.count()` times in a row. Stops at the first failure.
    pub fn run(&self, config: &SenderConfig) -> Result<usize, Fail> {
        let dst: [u8; 6] = config.dst_addr().octets();
        let src: [u8; 6] = config.src_addr().octets();
        let ether_type: [u8; 2] = config.ether_type().to_be_bytes();

        debug!(
            "run(): ifname={:?} count={:?} frame=\n{:?}",
            config.interface(),
            config.count(),
            build_frame(config.dst_addr(), config.src_addr(), config.ether_type(), config.payload())
        );

        for i in 0..config.count() {
            if let Err(e) = self.send(config.interface(), &dst, &src, &ether_type, config.payload()) {
                error!("run(): failed to send frame {} of {} (error={:?})", i + 1, config.count(), e);
                return Err(e);
            }
            trace!("run(): sent frame {} of {}", i + 1, config.count());
        }

        info!("run(): sent {} frames over {:?}", config.count(), config.interface());
        Ok(config.count())
    }
}

//======================================================================================================================
// Standalone Functions
//======================================================================================================================

/// Lays out an Ethernet frame.
pub fn build_frame(dst_addr: MacAddress, src_addr: MacAddress, ether_type: EtherType, payload: &[u8]) -> Frame {
    let header: Ethernet2Header = Ethernet2Header::new(dst_addr, src_addr, ether_type);
    Frame::new(&header, payload)
}

/// Transmits `frame` as a single transmission. A short write is a send failure.
fn transmit_all<L: LinkLayer>(endpoint: &mut L, frame: &Frame) -> Result<(), Fail> {
    match endpoint.transmit(frame.as_bytes())? {
        nbytes if nbytes == frame.len() => Ok(()),
        nbytes => {
            let cause: String = format!("short write (expected={:?} sent={:?})", frame.len(), nbytes);
            warn!("transmit_all(): {}", cause);
            Err(Fail::send_error(libc::EIO, &cause))
        },
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
