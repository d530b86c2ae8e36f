//! Error codes and exit status for boltctl

use bolt_common::EntryError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors (config, storage)
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when input fails validation
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Exit code when the requested entry id does not exist
pub const EXIT_UNKNOWN_ID: i32 = 3;

/// Invalid command-line usage detected after argument parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct UsageError(pub String);

/// Map an error chain to the process exit code
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(entry_err) = cause.downcast_ref::<EntryError>() {
            return match entry_err {
                EntryError::UnknownId(_) => EXIT_UNKNOWN_ID,
                EntryError::EmptyTopic | EntryError::EmptyInformation => EXIT_INVALID_INPUT,
            };
        }
        if cause.downcast_ref::<UsageError>().is_some() {
            return EXIT_INVALID_INPUT;
        }
    }
    EXIT_GENERAL_ERROR
}
