// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//==============================================================================
// Imports
//==============================================================================

use ::flexi_logger::{
    FlexiLoggerError,
    Logger,
    LoggerHandle,
};
use ::std::sync::{
    Mutex,
    Once,
};

//==============================================================================
// Constants
//==============================================================================

/// Log specification used by the logger.
const LOG_SPEC: &str = "info";

//==============================================================================
// Static Variables
//==============================================================================

/// Guardian to the logging initialize function.
static INIT_LOG: Once = Once::new();

/// Handle to the running logger. Kept alive for the lifetime of the process.
static LOGGER: Mutex<Option<LoggerHandle>> = Mutex::new(None);

//==============================================================================
// Standalone Functions
//==============================================================================

/// Initializes logging features. Only the first call starts the logger, and only that call can fail.
pub fn initialize() -> Result<(), FlexiLoggerError> {
    let mut result: Result<(), FlexiLoggerError> = Ok(());
    INIT_LOG.call_once(|| match Logger::try_with_str(LOG_SPEC).and_then(|logger| logger.log_to_stderr().start()) {
        Ok(handle) => {
            if let Ok(mut logger) = LOGGER.lock() {
                *logger = Some(handle);
            }
        },
        Err(e) => result = Err(e),
    });
    result
}

//==============================================================================
// Unit Tests
//==============================================================================
