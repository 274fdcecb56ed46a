use crate::tape::Tape;
use crate::vm_error::VMError;
use crate::vm_iterator::VMIterator;
use boolf_types::{
    bits::{self, BitStream},
    instructions::{HumanReadableInstruction, RawInstruction},
    program::Program,
    state::{VMState, VMStateFinal},
};
use std::num::NonZeroUsize;

// Represents the VM capable of interpreting Boolfuck programs. It owns the execution
// environment: the tape, the instruction pointer, the input bits and the output bits.
#[derive(Debug)]
pub struct BoolfuckVM {
    program: Program,
    tape: Tape,
    input: BitStream,
    output: Vec<bool>,
    instruction_index: usize,
    instructions_processed: usize,
    step_limit: Option<NonZeroUsize>,
    report_state: bool,
}

impl BoolfuckVM {
    // Constructs a new VM instance with specified settings
    pub fn new(
        program: Program,
        cell_count: NonZeroUsize,
        input: BitStream,
        step_limit: Option<NonZeroUsize>,
        report_state: bool,
    ) -> Self {
        BoolfuckVM {
            program,
            tape: Tape::new(cell_count),
            input,
            output: Vec::new(),
            instruction_index: 0,
            instructions_processed: 0,
            step_limit,
            report_state,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn instructions_processed(&self) -> usize {
        self.instructions_processed
    }

    pub fn is_finished(&self) -> bool {
        self.instruction_index >= self.program.len()
    }

    /// Bits written by `;` so far, in program order.
    pub fn output_bits(&self) -> &[bool] {
        &self.output
    }

    /// Output decoded into bytes, the last byte zero-padded if incomplete.
    pub fn output_bytes(&self) -> Vec<u8> {
        bits::decode(&self.output)
    }

    fn process_instruction(
        &mut self,
        hr_instruction: HumanReadableInstruction,
    ) -> Result<(), VMError> {
        // Most of the time, we just move forward by one. Only a taken jump is different.
        let mut next_index = self.instruction_index + 1;
        log::trace!("Processing instruction: {}", hr_instruction);
        match hr_instruction.raw_instruction() {
            RawInstruction::FlipBit => self.tape.flip(),
            RawInstruction::ReadBit => {
                let bit = self.input.next_bit();
                self.tape.write(bit);
            }
            RawInstruction::WriteBit => self.output.push(self.tape.read()),
            RawInstruction::MoveLeft => self.tape.move_left(),
            RawInstruction::MoveRight => self.tape.move_right(),
            RawInstruction::ConditionalForward => {
                if !self.tape.read() {
                    // Land on the matching ], which is evaluated next and falls through
                    next_index = self.program.matching_bracket(self.instruction_index)?;
                    log::debug!("Jumping forward to {}", next_index);
                }
            }
            RawInstruction::ConditionalBackward => {
                if self.tape.read() {
                    // Land on the matching [, which re-tests the cell
                    next_index = self.program.matching_bracket(self.instruction_index)?;
                    log::debug!("Jumping back to {}", next_index);
                }
            }
        }
        // Track number of instructions processed
        self.instructions_processed += 1;

        // Move to the next instruction
        self.instruction_index = next_index;

        Ok(())
    }

    /// Executes a single instruction.
    ///
    /// Returns the state after the step, or `None` once the program has ended.
    pub fn interpret_step(&mut self) -> Result<Option<VMState>, VMError> {
        let Some(&hr_instruction) = self.program.instructions().get(self.instruction_index)
        else {
            return Ok(None);
        };

        if let Some(limit) = self.step_limit {
            if self.instructions_processed >= limit.get() {
                let err = VMError::StepLimitExceeded {
                    limit: limit.get(),
                    instruction: hr_instruction,
                };
                log::error!("{}", err);
                return Err(err);
            }
        }

        self.process_instruction(hr_instruction)?;

        let state = self.state(Some(hr_instruction.raw_instruction()));
        if self.report_state {
            log::trace!("{:?}", state);
        }
        Ok(Some(state))
    }

    /// Runs the program to completion or until an error occurs.
    ///
    /// The final state is only captured when state reporting is enabled, since
    /// collecting the set cells walks the whole tape.
    pub fn interpret(&mut self) -> Result<Option<VMStateFinal>, VMError> {
        while self.interpret_step()?.is_some() {}

        log::debug!(
            "Program finished after {} instructions, {} output bits",
            self.instructions_processed,
            self.output.len()
        );
        Ok(self.report_state.then(|| self.final_state()))
    }

    pub fn final_state(&self) -> VMStateFinal {
        VMStateFinal::new(self.state(None), self.tape.set_cells(), self.output.len())
    }

    fn state(&self, last_instruction: Option<RawInstruction>) -> VMState {
        VMState::new(
            self.tape.read(),
            self.tape.cursor(),
            self.instruction_index,
            last_instruction,
            self.instructions_processed,
        )
    }

    // Returns an iterator that allows stepping through the program execution
    pub fn iter(&mut self) -> VMIterator<'_> {
        VMIterator::new(self)
    }
}
