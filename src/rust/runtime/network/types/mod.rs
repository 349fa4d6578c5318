// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod ethertype;
mod macaddr;

//======================================================================================================================
// Exports
//======================================================================================================================

pub use self::{
    ethertype::{
        EtherType,
        ETHER_TYPE_SIZE,
    },
    macaddr::{
        MacAddress,
        MAC_ADDRESS_SIZE,
    },
};
