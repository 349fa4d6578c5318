// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//==============================================================================
// Imports
//==============================================================================

use ::libc::{
    c_int,
    EACCES,
    EINVAL,
    EIO,
    ENODEV,
    ENXIO,
    EPERM,
};
use ::std::{
    error,
    fmt,
    io,
};

//==============================================================================
// Structures
//==============================================================================

/// Failure Kinds
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FailKind {
    /// A MAC address is not exactly 6 bytes long.
    InvalidAddress,
    /// An EtherType is not exactly 2 bytes long.
    InvalidEtherType,
    /// The named network interface does not exist on the host.
    InterfaceNotFound,
    /// The process lacks the privilege to use a raw socket.
    PermissionDenied,
    /// Transmission failed at the OS or driver level.
    SendError,
}

/// Failure
#[derive(Clone)]
pub struct Fail {
    /// Failure kind.
    pub kind: FailKind,
    /// Error code.
    pub errno: c_int,
    /// Cause.
    pub cause: String,
}

//==============================================================================
// Associate Functions
//==============================================================================

/// Associate Functions for Failure Kinds
impl FailKind {
    /// Classifies an OS error code. Codes that do not name a missing interface or a missing privilege are send
    /// failures.
    pub fn from_errno(errno: c_int) -> Self {
        match errno {
            ENODEV | ENXIO => FailKind::InterfaceNotFound,
            EPERM | EACCES => FailKind::PermissionDenied,
            _ => FailKind::SendError,
        }
    }
}

/// Associate Functions for Failures
impl Fail {
    /// Creates a new Failure
    pub fn new(kind: FailKind, errno: c_int, cause: &str) -> Self {
        Self {
            kind,
            errno,
            cause: cause.to_string(),
        }
    }

    /// Creates a failure for a MAC address of the wrong length.
    pub fn invalid_address(cause: &str) -> Self {
        Self::new(FailKind::InvalidAddress, EINVAL, cause)
    }

    /// Creates a failure for an EtherType of the wrong length.
    pub fn invalid_ether_type(cause: &str) -> Self {
        Self::new(FailKind::InvalidEtherType, EINVAL, cause)
    }

    /// Creates a failure for a network interface that could not be found.
    pub fn interface_not_found(cause: &str) -> Self {
        Self::new(FailKind::InterfaceNotFound, ENODEV, cause)
    }

    /// Creates a failure for a transmission fault.
    pub fn send_error(errno: c_int, cause: &str) -> Self {
        Self::new(FailKind::SendError, errno, cause)
    }

    /// Creates a failure from an OS error code, deriving its kind from the code.
    pub fn from_errno(errno: c_int, cause: &str) -> Self {
        Self::new(FailKind::from_errno(errno), errno, cause)
    }

    /// Creates a failure from the calling thread's last OS error.
    pub fn last_os_error(cause: &str) -> Self {
        let errno: c_int = io::Error::last_os_error().raw_os_error().unwrap_or(EIO);
        Self::from_errno(errno, cause)
    }
}

//==============================================================================
// Trait Implementations
//==============================================================================

/// Display Trait Implementation for Failures
impl fmt::Display for Fail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (errno={:?}): {}", self.kind, self.errno, self.cause)
    }
}

/// Debug trait Implementation for Failures
impl fmt::Debug for Fail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {:?} {:?}: {:?}", self.kind, self.errno, self.cause)
    }
}

/// Error Trait Implementation for Failures
impl error::Error for Fail {}

//==============================================================================
// Unit Tests
//==============================================================================
