// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

mod rawsockaddr;
mod rawsocket;

//======================================================================================================================
// Exports
//======================================================================================================================

pub use rawsockaddr::RawSocketAddr;
pub use rawsocket::RawSocket;
