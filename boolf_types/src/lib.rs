//! # Boolfuck Program Representation and State Management
//!
//! Provides utilities for representing and parsing Boolfuck programs, the
//! bit-level encoding of their input and output, and snapshots of the state of
//! a Boolfuck virtual machine.

// Converts byte strings to and from least-significant-bit-first bit sequences.
pub mod bits;

// Errors raised while loading a program or resolving its loops.
pub mod error;

// Instructions and bracket matching.
pub mod instructions;

// Reading and parsing Boolfuck programs from readers or strings.
pub mod program;

// Snapshots of the virtual machine during and after execution.
pub mod state;

pub use error::ProgramError;
pub use program::Program;
