// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use crate::runtime::fail::Fail;
use ::std::fmt;

//======================================================================================================================
// Constants
//======================================================================================================================

/// Length of an EtherType field (in bytes).
pub const ETHER_TYPE_SIZE: usize = 2;

//======================================================================================================================
// Structures
//======================================================================================================================

/// EtherType. Any 16-bit value is accepted since frames are emitted verbatim.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct EtherType(u16);

//======================================================================================================================
// Associate Functions
//======================================================================================================================

impl EtherType {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Builds an EtherType from its big-endian encoding, which must be exactly [ETHER_TYPE_SIZE] bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, Fail> {
        match <[u8; ETHER_TYPE_SIZE]>::try_from(bytes) {
            Ok(be_bytes) => Ok(Self(u16::from_be_bytes(be_bytes))),
            Err(_) => {
                let cause: String = format!(
                    "EtherType must be {} bytes long (len={:?})",
                    ETHER_TYPE_SIZE,
                    bytes.len()
                );
                Err(Fail::invalid_ether_type(&cause))
            },
        }
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// Returns the wire (big-endian) encoding of the target [EtherType].
    pub fn to_be_bytes(&self) -> [u8; ETHER_TYPE_SIZE] {
        self.0.to_be_bytes()
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl fmt::Debug for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EtherType({:#06x})", self.value())
    }
}

impl TryFrom<&[u8]> for EtherType {
    type Error = Fail;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        EtherType::try_from_slice(bytes)
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
