use crate::instructions::RawInstruction;
use core::fmt;

// Extends VMState with the set cells of the tape and the amount of output at the
// end of program execution, giving a complete picture of the final program state
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct VMStateFinal {
    state: VMState,
    set_cells: Vec<isize>,
    output_bits: usize,
}

impl VMStateFinal {
    pub fn new(state: VMState, set_cells: Vec<isize>, output_bits: usize) -> Self {
        VMStateFinal {
            state,
            set_cells,
            output_bits,
        }
    }

    pub fn state(&self) -> &VMState {
        &self.state
    }

    /// Logical positions of every cell holding a 1, in ascending order.
    pub fn set_cells(&self) -> &[isize] {
        &self.set_cells
    }

    pub fn output_bits(&self) -> usize {
        self.output_bits
    }
}

impl fmt::Display for VMStateFinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set_cells_str = self
            .set_cells
            .iter()
            .map(|position| position.to_string())
            .collect::<Vec<String>>()
            .join(",");

        write!(
            f,
            "{}\nOutput bits: {}\nSet cells:\n{}",
            self.state, self.output_bits, set_cells_str
        )
    }
}

// Represents the state of the VM after a single step, useful for debugging or state inspection
#[derive(Debug, PartialEq, Eq, Default, Clone, Copy)]
pub struct VMState {
    cell_value: bool,
    cursor: isize,
    instruction_index: usize,
    last_instruction: Option<RawInstruction>,
    instructions_processed: usize,
}

impl VMState {
    pub fn new(
        cell_value: bool,
        cursor: isize,
        instruction_index: usize,
        last_instruction: Option<RawInstruction>,
        instructions_processed: usize,
    ) -> Self {
        VMState {
            cell_value,
            cursor,
            instruction_index,
            last_instruction,
            instructions_processed,
        }
    }

    pub fn cell_value(&self) -> bool {
        self.cell_value
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    /// Index of the next instruction to execute.
    pub fn instruction_index(&self) -> usize {
        self.instruction_index
    }

    pub fn last_instruction(&self) -> Option<RawInstruction> {
        self.last_instruction
    }

    pub fn instructions_processed(&self) -> usize {
        self.instructions_processed
    }
}

impl fmt::Display for VMState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last_instruction = match self.last_instruction {
            Some(instruction) => instruction.to_string(),
            None => "None".to_string(),
        };
        write!(
            f,
            "Cell value: {}\nCursor: {}\nNext instruction index: {}\nLast instruction: {}\nInstructions processed: {}",
            u8::from(self.cell_value),
            self.cursor,
            self.instruction_index,
            last_instruction,
            self.instructions_processed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_state_display_lists_set_cells() {
        let state = VMState::new(true, -3, 10, Some(RawInstruction::MoveLeft), 42);
        let final_state = VMStateFinal::new(state, vec![-3, 0, 7], 16);
        assert_eq!(
            final_state.to_string(),
            "Cell value: 1\nCursor: -3\nNext instruction index: 10\nLast instruction: Move Left (<)\nInstructions processed: 42\nOutput bits: 16\nSet cells:\n-3,0,7"
        );
    }
}
