// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod rawsocket;

//======================================================================================================================
// Imports
//======================================================================================================================

pub use self::rawsocket::{
    RawSocket,
    RawSocketAddr,
};
use crate::runtime::{
    fail::Fail,
    network::LinkLayerProvider,
};
use ::std::ffi::CString;

//======================================================================================================================
// Structures
//======================================================================================================================

/// Linux link layer. Opens `AF_PACKET` raw sockets bound to a network interface.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinuxLinkLayer;

//======================================================================================================================
// Associate Functions
//======================================================================================================================

/// Associate Functions for Linux Link Layer
impl LinuxLinkLayer {
    /// Gets the interface index of the network interface named `ifname`.
    pub fn get_ifindex(ifname: &str) -> Result<i32, Fail> {
        if ifname.is_empty() || ifname.len() >= libc::IFNAMSIZ {
            let cause: String = format!("invalid interface name (ifname={:?})", ifname);
            error!("get_ifindex(): {}", cause);
            return Err(Fail::interface_not_found(&cause));
        }

        let c_ifname: CString = match CString::new(ifname) {
            Ok(c_ifname) => c_ifname,
            Err(_) => {
                let cause: String = format!("interface name contains a nul byte (ifname={:?})", ifname);
                error!("get_ifindex(): {}", cause);
                return Err(Fail::interface_not_found(&cause));
            },
        };

        match unsafe { libc::if_nametoindex(c_ifname.as_ptr()) } {
            0 => {
                let cause: String = format!("no such network interface (ifname={:?})", ifname);
                error!("get_ifindex(): {}", cause);
                Err(Fail::interface_not_found(&cause))
            },
            ifindex => Ok(ifindex as i32),
        }
    }
}

//======================================================================================================================
// Trait Implementations
//======================================================================================================================

impl LinkLayerProvider for LinuxLinkLayer {
    type Endpoint = RawSocket;

    fn open(&self, ifname: &str) -> Result<RawSocket, Fail> {
        let ifindex: i32 = Self::get_ifindex(ifname)?;
        let socket: RawSocket = RawSocket::new()?;
        let sockaddr: RawSocketAddr = RawSocketAddr::new(ifindex);
        socket.bind(&sockaddr)?;
        debug!("open(): ifname={:?} ifindex={:?}", ifname, ifindex);
        Ok(socket)
    }
}

//======================================================================================================================
// Unit Tests
//======================================================================================================================
