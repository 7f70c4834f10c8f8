//! Library half of the `fleetsave` binary: config loading, explanations and exit codes.

pub mod config;
pub mod explain;

use fleetsave_domain::ValidationError;

/// Exit code for a rejected fleet configuration.
pub const EXIT_INVALID_INPUT: u8 = 2;

/// Exit code for any other failure (I/O, parse, serialization).
pub const EXIT_RUNTIME_ERROR: u8 = 1;

/// Maps a command failure to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if err
        .chain()
        .any(|cause| cause.downcast_ref::<ValidationError>().is_some())
    {
        EXIT_INVALID_INPUT
    } else {
        EXIT_RUNTIME_ERROR
    }
}
