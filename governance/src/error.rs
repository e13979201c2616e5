use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnteError {
    #[error("tx contains unsupported proposal content: {0}")]
    UnsupportedProposal(String),

    #[error("tx contains unsupported proposal message type: {0}")]
    UnsupportedMessage(String),
}
