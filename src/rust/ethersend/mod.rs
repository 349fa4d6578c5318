// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

pub mod config;
mod sender;

//======================================================================================================================
// Exports
//======================================================================================================================

pub use self::sender::{
    build_frame,
    FrameSender,
};
