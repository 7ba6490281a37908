//! Board registry errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Must have exactly {expected} board members, got {actual}")]
    InvalidBoardSize { expected: usize, actual: usize },

    #[error("Duplicate board member: {0}")]
    DuplicateMember(String),
}
