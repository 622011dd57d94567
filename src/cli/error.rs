// Error classification for consistent messages and exit codes

use crate::archive::ArchiveError;
use crate::config::ConfigError;
use crate::input::InputError;
use thiserror::Error;

/// A failure caused by the user's input rather than by the program
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UserError(pub String);

/// Build a user error (exit code 1)
pub fn user_error(message: impl Into<String>) -> anyhow::Error {
    UserError(message.into()).into()
}

/// User errors are for invalid input, missing files and bad layouts (exit code 1).
/// Anything else is an internal error (exit code 2).
pub fn is_user_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause.is::<UserError>()
            || cause.is::<InputError>()
            || cause.is::<ConfigError>()
            || matches!(
                cause.downcast_ref::<ArchiveError>(),
                Some(
                    ArchiveError::MissingRoot(_)
                        | ArchiveError::InvalidLabel(_)
                        | ArchiveError::NotADirectory(_)
                )
            )
    })
}

/// Exit code for an error returned from `run`
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if is_user_error(err) {
        1
    } else {
        2
    }
}
