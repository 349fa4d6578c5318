// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::network::types::{
    EtherType,
    MacAddress,
};
use ::std::{
    fmt,
    ops::Deref,
};

//======================================================================================================================
// Constants
//======================================================================================================================

pub const ETHERNET2_HEADER_SIZE: usize = 14;

//======================================================================================================================
// Structures
//======================================================================================================================

#[derive(Clone, Debug)]
pub struct Ethernet2Header {
    // Bytes 0..6
    dst_addr: MacAddress,
    // Bytes 6..12
    src_addr: MacAddress,
    // Bytes 12..14
    ether_type: EtherType,
}

/// A complete link-layer frame (header followed by payload), without FCS.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame(Vec<u8>);

//======================================================================================================================
// Associated Functions
//======================================================================================================================

impl Ethernet2Header {
    /// Creates a header for an Ethernet frame.
    pub fn new(dst_addr: MacAddress, src_addr: MacAddress, ether_type: EtherType) -> Self {
        Self {
            dst_addr,
            src_addr,
            ether_type,
        }
    }

    pub fn serialize(&self, buf: &mut [u8; ETHERNET2_HEADER_SIZE]) {
        buf[0..6].copy_from_slice(&self.dst_addr.octets());
        buf[6..12].copy_from_slice(&self.src_addr.octets());
        buf[12..14].copy_from_slice(&self.ether_type.to_be_bytes());
    }

    pub fn compute_size(&self) -> usize {
        ETHERNET2_HEADER_SIZE
    }
}

impl Frame {
    /// Builds a frame by laying out `header` followed by `payload`.
    pub fn new(header: &Ethernet2Header, payload: &[u8]) -> Self {
        let mut hdr_buf: [u8; ETHERNET2_HEADER_SIZE] = [0; ETHERNET2_HEADER_SIZE];
        header.serialize(&mut hdr_buf);

        let mut buf: Vec<u8> = Vec::with_capacity(header.compute_size() + payload.len());
        buf.extend_from_slice(&hdr_buf);
        buf.extend_from_slice(payload);
        Self(buf)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl Deref for Frame {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Hex dump with 16 bytes per line, each line prefixed by its offset.
impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, line) in self.0.chunks(16).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:04x}:", i * 16)?;
            for byte in line {
                write!(f, " {:02x}", byte)?;
            }
        }
        Ok(())
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
