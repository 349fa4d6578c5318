// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use ::libc::{
    sockaddr,
    socklen_t,
};
use ::std::mem;

//======================================================================================================================
// Constants & Structures
//======================================================================================================================

/// Link-layer address of a raw socket (`sockaddr_ll`).
#[derive(Clone, Copy)]
pub struct RawSocketAddr(libc::sockaddr_ll);

//======================================================================================================================
// Associate Functions
//======================================================================================================================

impl RawSocketAddr {
    /// Creates an address that names the interface `ifindex`. The protocol is left as zero, so a socket bound to it
    /// only transmits.
    pub fn new(ifindex: i32) -> Self {
        let mut addr: libc::sockaddr_ll = unsafe { mem::zeroed() };
        addr.sll_family = libc::AF_PACKET as libc::c_ushort;
        addr.sll_protocol = 0;
        addr.sll_ifindex = ifindex;
        RawSocketAddr(addr)
    }

    pub fn ifindex(&self) -> i32 {
        self.0.sll_ifindex
    }

    pub fn as_sockaddr_ptr(&self) -> (*const sockaddr, socklen_t) {
        let sockaddr_ptr: *const sockaddr = &self.0 as *const libc::sockaddr_ll as *const sockaddr;
        let sockaddr_len: socklen_t = mem::size_of::<libc::sockaddr_ll>() as socklen_t;

        (sockaddr_ptr, sockaddr_len)
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
