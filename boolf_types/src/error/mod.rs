use crate::instructions::HumanReadableInstruction;
use thiserror::Error;

/// Errors raised while loading a program or resolving its loops.
#[derive(Error, Debug)]
pub enum ProgramError {
    #[error("Failed to read program: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed program: no matching bracket for {instruction}")]
    MalformedProgram {
        instruction: HumanReadableInstruction,
    },
}
