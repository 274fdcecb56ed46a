use crate::error::ProgramError;
use crate::instructions::{BracketMatcher, HumanReadableInstruction, RawInstruction};
use std::io::Read;

/// A parsed Boolfuck program.
///
/// Only instruction characters are kept; everything else is a comment. Bracket
/// balance is not checked here, an unmatched bracket only fails when a jump
/// through it is taken.
#[derive(Debug)]
pub struct Program {
    instructions: Vec<HumanReadableInstruction>,
    matcher: BracketMatcher,
}

impl Program {
    /// Reads a whole program from `reader`.
    ///
    /// With `precompute_jumps` every bracket partner is resolved once up front,
    /// otherwise each jump scans the program for its partner.
    pub fn new<R: Read>(mut reader: R, precompute_jumps: bool) -> Result<Self, ProgramError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(Self::parse(&source, precompute_jumps))
    }

    pub fn parse(source: &str, precompute_jumps: bool) -> Self {
        let instructions = Self::read_instructions(source);
        let matcher = BracketMatcher::new(&instructions, precompute_jumps);
        Program {
            instructions,
            matcher,
        }
    }

    fn read_instructions(source: &str) -> Vec<HumanReadableInstruction> {
        let mut vec = Vec::new();

        for (line_idx, line) in source.lines().enumerate() {
            for (col_idx, c) in line.chars().enumerate() {
                if let Some(instruction) = RawInstruction::from_char(c) {
                    let index = vec.len();
                    vec.push(HumanReadableInstruction::new(
                        instruction,
                        line_idx,
                        col_idx,
                        index,
                    ));
                }
            }
        }

        vec
    }

    pub fn instructions(&self) -> &[HumanReadableInstruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn uses_jump_table(&self) -> bool {
        self.matcher.uses_jump_table()
    }

    /// Index of the bracket paired with the bracket at `index`.
    pub fn matching_bracket(&self, index: usize) -> Result<usize, ProgramError> {
        self.matcher.matching_bracket(&self.instructions, index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boolf_test_utils::{TestFile, TEST_FILE_NUM_INSTRUCTIONS};

    #[test]
    fn test_read_data() -> Result<(), Box<dyn std::error::Error>> {
        let program = Program::new(TestFile::new()?, false)?;
        assert_eq!(program.len(), TEST_FILE_NUM_INSTRUCTIONS);

        // "+[>,[<;]]" then "<< read then write ;"
        let all_instructions = [
            (RawInstruction::FlipBit, 1, 1),
            (RawInstruction::ConditionalForward, 1, 2),
            (RawInstruction::MoveRight, 1, 3),
            (RawInstruction::ReadBit, 1, 4),
            (RawInstruction::ConditionalForward, 1, 5),
            (RawInstruction::MoveLeft, 1, 6),
            (RawInstruction::WriteBit, 1, 7),
            (RawInstruction::ConditionalBackward, 1, 8),
            (RawInstruction::ConditionalBackward, 1, 9),
            (RawInstruction::MoveLeft, 2, 1),
            (RawInstruction::MoveLeft, 2, 2),
            (RawInstruction::WriteBit, 2, 20),
        ];

        for (i, instruction) in program.instructions().iter().enumerate() {
            let (raw, line, column) = all_instructions[i];
            assert_eq!(instruction.raw_instruction(), raw);
            assert_eq!(instruction.line(), line);
            assert_eq!(instruction.column(), column);
            assert_eq!(instruction.index(), i);
        }

        assert_eq!(program.matching_bracket(1)?, 8);
        assert_eq!(program.matching_bracket(7)?, 4);

        Ok(())
    }

    #[test]
    fn test_comments_are_dropped() {
        let program = Program::parse("hello - . world", false);
        assert!(program.is_empty());
    }

    #[test]
    fn test_unbalanced_program_still_parses() {
        // Balance is only checked when a jump is taken
        for precompute in [false, true] {
            let program = Program::parse("[", precompute);
            assert_eq!(program.len(), 1);
            assert_eq!(program.uses_jump_table(), precompute);
            assert!(matches!(
                program.matching_bracket(0),
                Err(ProgramError::MalformedProgram { .. })
            ));
        }
    }
}
