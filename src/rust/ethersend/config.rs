// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::network::types::{
    EtherType,
    MacAddress,
};

//======================================================================================================================
// Constants
//======================================================================================================================

/// Destination MAC address of generated frames.
pub const DST_MAC: MacAddress = MacAddress::new([0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);

/// Source MAC address of generated frames.
pub const SRC_MAC: MacAddress = MacAddress::new([0x52, 0x54, 0x00, 0x12, 0x34, 0x57]);

/// EtherType of generated frames.
pub const ETHER_TYPE: EtherType = EtherType::new(0x8000);

/// Payload segments of generated frames, as (fill byte, length) pairs, in wire order.
pub const PAYLOAD_SEGMENTS: [(u8, usize); 3] = [(0xDD, 50), (0xCC, 30), (0xAA, 30)];

/// Number of frames sent per run.
pub const FRAME_COUNT: usize = 1000;

//======================================================================================================================
// Structures
//======================================================================================================================

/// Sender configuration.
#[derive(Clone, Debug)]
pub struct SenderConfig {
    /// Name of the network interface to transmit on.
    interface: String,
    /// Destination MAC address.
    dst_addr: MacAddress,
    /// Source MAC address.
    src_addr: MacAddress,
    /// EtherType.
    ether_type: EtherType,
    /// Frame payload.
    payload: Vec<u8>,
    /// Number of frames to send.
    count: usize,
}

//======================================================================================================================
// Associate Functions
//======================================================================================================================

impl SenderConfig {
    /// Creates a configuration that sends the default test frame [FRAME_COUNT] times over `interface`.
    pub fn new(interface: &str) -> Self {
        Self {
            interface: interface.to_string(),
            dst_addr: DST_MAC,
            src_addr: SRC_MAC,
            ether_type: ETHER_TYPE,
            payload: default_payload(),
            count: FRAME_COUNT,
        }
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn dst_addr(&self) -> MacAddress {
        self.dst_addr
    }

    pub fn src_addr(&self) -> MacAddress {
        self.src_addr
    }

    pub fn ether_type(&self) -> EtherType {
        self.ether_type
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

//======================================================================================================================
// Standalone Functions
//======================================================================================================================

/// Builds the default payload from [PAYLOAD_SEGMENTS].
pub fn default_payload() -> Vec<u8> {
    let len: usize = PAYLOAD_SEGMENTS.iter().map(|(_, len)| len).sum();
    let mut payload: Vec<u8> = Vec::with_capacity(len);
    for (fill, len) in PAYLOAD_SEGMENTS {
        payload.resize(payload.len() + len, fill);
    }
    payload
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
