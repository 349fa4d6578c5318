// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//======================================================================================================================
// Imports
//======================================================================================================================

use super::RawSocketAddr;
use crate::runtime::{
    fail::Fail,
    network::LinkLayer,
};
use ::std::io;

//======================================================================================================================
// Constants & Structures
//======================================================================================================================

/// Raw socket. The underlying descriptor is closed when the socket is dropped.
pub struct RawSocket(libc::c_int);

//======================================================================================================================
// Associate Functions
//======================================================================================================================

/// Associated functions for raw sockets.
impl RawSocket {
    /// Creates a raw socket.
    pub fn new() -> Result<Self, Fail> {
        let domain: i32 = libc::AF_PACKET; // Do not parse any headers.
        let ty: i32 = libc::SOCK_RAW | libc::SOCK_CLOEXEC; // Blocking, raw socket.
        let protocol: i32 = 0; // Do not receive any packets.
        let sockfd: i32 = unsafe { libc::socket(domain, ty, protocol) };

        // Check if we failed to create the underlying raw socket.
        if sockfd == -1 {
            return Err(Fail::last_os_error("failed to create raw socket"));
        }

        trace!("new(): sockfd={:?}", sockfd);
        Ok(RawSocket(sockfd))
    }

    // Binds a socket to a raw address.
    pub fn bind(&self, addr: &RawSocketAddr) -> Result<(), Fail> {
        let ret: i32 = unsafe {
            let (sockaddr_ptr, address_len): (*const libc::sockaddr, libc::socklen_t) = addr.as_sockaddr_ptr();
            libc::bind(self.0, sockaddr_ptr, address_len)
        };

        // Check if we failed to bind the underlying raw socket.
        if ret == -1 {
            let cause: String = format!("failed to bind raw socket (ifindex={:?})", addr.ifindex());
            return Err(Fail::last_os_error(&cause));
        }

        Ok(())
    }

    /// Sends data through a bound raw socket.
    pub fn send(&self, buf: &[u8]) -> Result<usize, Fail> {
        let buf_len: usize = buf.len();
        let buf_ptr: *const libc::c_void = buf.as_ptr() as *const libc::c_void;

        let nbytes: isize = unsafe { libc::send(self.0, buf_ptr, buf_len, 0) };

        // Check if we failed to send data through raw socket.
        if nbytes == -1 {
            let errno: i32 = io::Error::last_os_error().raw_os_error().unwrap_or(libc::EIO);
            return Err(Fail::send_error(errno, "failed to send data through raw socket"));
        }

        Ok(nbytes as usize)
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl LinkLayer for RawSocket {
    fn transmit(&mut self, frame: &[u8]) -> Result<usize, Fail> {
        self.send(frame)
    }
}

impl Drop for RawSocket {
    fn drop(&mut self) {
        trace!("drop(): sockfd={:?}", self.0);
        if unsafe { libc::close(self.0) } == -1 {
            warn!("drop(): failed to close raw socket (error={:?})", io::Error::last_os_error());
        }
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
