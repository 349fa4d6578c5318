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

/// Length of a MAC address (in bytes).
pub const MAC_ADDRESS_SIZE: usize = 6;

//======================================================================================================================
// Structures
//======================================================================================================================

/// MAC Address
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(eui48::MacAddress);

//======================================================================================================================
// Associate Functions
//======================================================================================================================

impl MacAddress {
    pub const fn new(bytes: [u8; MAC_ADDRESS_SIZE]) -> Self {
        MacAddress(eui48::MacAddress::new(bytes))
    }

    /// Builds a MAC address from a byte slice that must be exactly [MAC_ADDRESS_SIZE] bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self, Fail> {
        if bytes.len() != MAC_ADDRESS_SIZE {
            let cause: String = format!(
                "MAC address must be {} bytes long (len={:?})",
                MAC_ADDRESS_SIZE,
                bytes.len()
            );
            return Err(Fail::invalid_address(&cause));
        }

        match eui48::MacAddress::from_bytes(bytes) {
            Ok(addr) => Ok(Self(addr)),
            Err(_) => Err(Fail::invalid_address("failed to parse MAC address")),
        }
    }

    /// Returns the array of bytes composing the target [MacAddress].
    pub fn octets(&self) -> [u8; MAC_ADDRESS_SIZE] {
        self.0.to_array()
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let octets: [u8; MAC_ADDRESS_SIZE] = self.octets();
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            octets[0], octets[1], octets[2], octets[3], octets[4], octets[5]
        )
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "MacAddress({})", self)
    }
}

impl TryFrom<&[u8]> for MacAddress {
    type Error = Fail;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        MacAddress::try_from_slice(bytes)
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
