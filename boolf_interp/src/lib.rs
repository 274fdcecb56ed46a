//! # Boolfuck virtual machine
//!
//! Runs Boolfuck programs: Brainfuck on a tape of bits. Input bytes are fed to
//! the program one bit at a time, least-significant bit first, and the bits it
//! writes are packed back into bytes the same way.
//!
//! ```
//! let output = boolf_interp::run(boolf_interp::programs::REVERSE, b"123")?;
//! assert_eq!(output, b"321");
//! # Ok::<(), boolf_interp::VMError>(())
//! ```

pub mod programs;
pub mod tape;
pub mod vm;
pub mod vm_builder;
pub mod vm_error;
pub mod vm_iterator;

pub use vm::BoolfuckVM;
pub use vm_builder::VMBuilder;
pub use vm_error::VMError;

/// Runs `program` to completion against `input` and returns its output bytes.
pub fn run(program: &str, input: &[u8]) -> Result<Vec<u8>, VMError> {
    let mut vm = VMBuilder::new().set_program(program).set_input(input).build()?;
    vm.interpret()?;
    Ok(vm.output_bytes())
}
