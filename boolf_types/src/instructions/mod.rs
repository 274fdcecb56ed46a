use crate::error::ProgramError;
use core::fmt;

/// A single Boolfuck instruction. Any other character in a program is a comment.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum RawInstruction {
    /// `+` negates the bit under the cursor
    FlipBit,
    /// `,` reads the next input bit into the cell under the cursor
    ReadBit,
    /// `;` writes the bit under the cursor to the output
    WriteBit,
    /// `<` moves the cursor one cell left
    MoveLeft,
    /// `>` moves the cursor one cell right
    MoveRight,
    /// `[` jumps to the matching `]` if the bit under the cursor is 0
    ConditionalForward,
    /// `]` jumps back to the matching `[` if the bit under the cursor is 1
    ConditionalBackward,
}

impl RawInstruction {
    pub(crate) fn from_char(c: char) -> Option<RawInstruction> {
        match c {
            '+' => Some(RawInstruction::FlipBit),
            ',' => Some(RawInstruction::ReadBit),
            ';' => Some(RawInstruction::WriteBit),
            '<' => Some(RawInstruction::MoveLeft),
            '>' => Some(RawInstruction::MoveRight),
            '[' => Some(RawInstruction::ConditionalForward),
            ']' => Some(RawInstruction::ConditionalBackward),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            RawInstruction::FlipBit => '+',
            RawInstruction::ReadBit => ',',
            RawInstruction::WriteBit => ';',
            RawInstruction::MoveLeft => '<',
            RawInstruction::MoveRight => '>',
            RawInstruction::ConditionalForward => '[',
            RawInstruction::ConditionalBackward => ']',
        }
    }
}

impl fmt::Display for RawInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawInstruction::FlipBit => write!(f, "Flip Bit (+)"),
            RawInstruction::ReadBit => write!(f, "Read Bit (,)"),
            RawInstruction::WriteBit => write!(f, "Write Bit (;)"),
            RawInstruction::MoveLeft => write!(f, "Move Left (<)"),
            RawInstruction::MoveRight => write!(f, "Move Right (>)"),
            RawInstruction::ConditionalForward => write!(f, "Conditional Forward ([)"),
            RawInstruction::ConditionalBackward => write!(f, "Conditional Backward (])"),
        }
    }
}

/// An instruction together with where it came from in the source text.
/// Line and column are 1-based, `index` is the position in the instruction sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct HumanReadableInstruction {
    instruction: RawInstruction,
    line: usize,
    column: usize,
    index: usize,
}

impl HumanReadableInstruction {
    pub(crate) fn new(
        instruction: RawInstruction,
        line: usize,
        column: usize,
        index: usize,
    ) -> Self {
        HumanReadableInstruction {
            instruction,
            line: line + 1,
            column: column + 1,
            index,
        }
    }

    pub fn raw_instruction(&self) -> RawInstruction {
        self.instruction
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for HumanReadableInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.line, self.column, self.instruction)
    }
}

/// Finds the `]` matching the `[` at `pc` by scanning right with a nesting counter.
///
/// # Panics
///
/// Panics if `pc` is not a valid index into `instructions`.
pub fn forward(
    instructions: &[HumanReadableInstruction],
    pc: usize,
) -> Result<usize, ProgramError> {
    let mut depth = 1usize;
    for (index, hr_instruction) in instructions.iter().enumerate().skip(pc + 1) {
        match hr_instruction.raw_instruction() {
            RawInstruction::ConditionalForward => depth += 1,
            RawInstruction::ConditionalBackward => {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            }
            _ => {}
        }
    }
    Err(unmatched(instructions[pc]))
}

/// Finds the `[` matching the `]` at `pc` by scanning left with a nesting counter.
///
/// # Panics
///
/// Panics if `pc` is not a valid index into `instructions`.
pub fn backward(
    instructions: &[HumanReadableInstruction],
    pc: usize,
) -> Result<usize, ProgramError> {
    let mut depth = 1usize;
    for (index, hr_instruction) in instructions[..pc].iter().enumerate().rev() {
        match hr_instruction.raw_instruction() {
            RawInstruction::ConditionalBackward => depth += 1,
            RawInstruction::ConditionalForward => {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            }
            _ => {}
        }
    }
    Err(unmatched(instructions[pc]))
}

fn unmatched(instruction: HumanReadableInstruction) -> ProgramError {
    let err = ProgramError::MalformedProgram { instruction };
    log::error!("{}", err);
    err
}

/// Resolves loop jumps, either by scanning the program on every jump or
/// through a table built once up front.
#[derive(Debug)]
pub(crate) struct BracketMatcher {
    // One entry per instruction. None for non-brackets and unmatched brackets.
    jump_table: Option<Vec<Option<usize>>>,
}

impl BracketMatcher {
    pub(crate) fn new(instructions: &[HumanReadableInstruction], precompute: bool) -> Self {
        let jump_table = precompute.then(|| Self::build_jump_table(instructions));
        BracketMatcher { jump_table }
    }

    fn build_jump_table(instructions: &[HumanReadableInstruction]) -> Vec<Option<usize>> {
        let mut jump_table = vec![None; instructions.len()];
        // Track the open brackets with a stack
        let mut open_brackets = Vec::new();

        for (index, hr_instruction) in instructions.iter().enumerate() {
            match hr_instruction.raw_instruction() {
                RawInstruction::ConditionalForward => open_brackets.push(index),
                RawInstruction::ConditionalBackward => {
                    // Left as None when unmatched, only an error if the jump is ever taken
                    if let Some(open_bracket) = open_brackets.pop() {
                        jump_table[open_bracket] = Some(index);
                        jump_table[index] = Some(open_bracket);
                    }
                }
                _ => {}
            }
        }

        if !open_brackets.is_empty() {
            log::debug!("{} unmatched opening bracket(s)", open_brackets.len());
        }
        jump_table
    }

    pub(crate) fn uses_jump_table(&self) -> bool {
        self.jump_table.is_some()
    }

    pub(crate) fn matching_bracket(
        &self,
        instructions: &[HumanReadableInstruction],
        pc: usize,
    ) -> Result<usize, ProgramError> {
        match &self.jump_table {
            Some(jump_table) => jump_table
                .get(pc)
                .copied()
                .flatten()
                .ok_or_else(|| unmatched(instructions[pc])),
            None => match instructions[pc].raw_instruction() {
                RawInstruction::ConditionalForward => forward(instructions, pc),
                RawInstruction::ConditionalBackward => backward(instructions, pc),
                _ => Err(unmatched(instructions[pc])),
            },
        }
    }
}
