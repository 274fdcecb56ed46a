use boolf_types::instructions::HumanReadableInstruction;
use boolf_types::ProgramError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VMError {
    // Loading the program failed, or a jump was taken through an unmatched bracket
    #[error(transparent)]
    Program(#[from] ProgramError),

    // Only raised when a step limit has been configured
    #[error("Step limit of {limit} reached before {instruction}")]
    StepLimitExceeded {
        limit: usize,
        instruction: HumanReadableInstruction,
    },

    // Errors occurring during the construction of the VM, typically due to misconfiguration
    #[error("Builder error: {reason}")]
    BuilderError { reason: String },
}

impl VMError {
    pub fn is_malformed_program(&self) -> bool {
        matches!(
            self,
            VMError::Program(ProgramError::MalformedProgram { .. })
        )
    }
}
