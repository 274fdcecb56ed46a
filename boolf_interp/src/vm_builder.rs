//! Provides a builder for creating instances of the BoolfuckVM struct.

use crate::{tape::DEFAULT_CELL_COUNT, vm::BoolfuckVM, vm_error::VMError};
use boolf_types::{bits::BitStream, program::Program};
use std::{
    fs::File,
    io::{BufReader, Read},
    num::NonZeroUsize,
    path::PathBuf,
};

/// Main builder object. Creates a BoolfuckVM according to various configs.
///
/// # Examples
///
/// Program from a string
///
/// ```rust
/// use boolf_interp::vm_builder::VMBuilder;
///
/// let mut vm = VMBuilder::new()
///     .set_program(",;,;,;,;,;,;,;,;")
///     .set_input("A")
///     .build()
///     .expect("Failed!");
/// vm.interpret().expect("Failed!");
/// assert_eq!(vm.output_bytes(), b"A");
/// ```
///
/// Setting more interesting parameters
///
/// ```rust
/// use boolf_interp::vm_builder::VMBuilder;
/// # use std::io::Cursor;
/// # use core::num::NonZeroUsize;
///
/// let vm = VMBuilder::new()
///     .set_program_reader(Cursor::new("+[>+]"))
///     .set_cell_count(NonZeroUsize::new(16))
///     .set_precompute_jumps(true)
///     .set_step_limit(NonZeroUsize::new(10_000))
///     .set_report_state(true)
///     .build()
///     .expect("Failed!");
/// ```
#[derive(Default)]
pub struct VMBuilder<'a> {
    cell_count: Option<NonZeroUsize>,
    input: Option<Vec<u8>>,
    program_source: Option<String>,
    program_file: Option<PathBuf>,
    program_reader: Option<Box<dyn Read + 'a>>,
    precompute_jumps: Option<bool>,
    step_limit: Option<NonZeroUsize>,
    report_state: Option<bool>,
}

impl<'a> VMBuilder<'a> {
    /// Creates a new instance of `VMBuilder`.
    pub fn new() -> Self {
        VMBuilder {
            cell_count: None,
            input: None,
            program_source: None,
            program_file: None,
            program_reader: None,
            precompute_jumps: None,
            step_limit: None,
            report_state: None,
        }
    }

    /// Sets the bytes the program reads with `,`.
    pub fn set_input<B: AsRef<[u8]>>(mut self, input: B) -> Self {
        self.input = Some(input.as_ref().to_vec());
        self
    }

    /// Uses the given source text as the program.
    pub fn set_program(mut self, source: &str) -> Self {
        self.program_source = Some(source.to_string());
        self
    }

    /// Sets a file path to read the Boolfuck program from
    pub fn set_program_file(mut self, filepath: PathBuf) -> Self {
        self.program_file = Some(filepath);
        self
    }

    /// Loads a Boolfuck program from a reader.
    pub fn set_program_reader<T>(mut self, reader: T) -> Self
    where
        T: Read + 'a,
    {
        self.program_reader = Some(Box::new(reader));
        self
    }

    /// Determines the number of cells the tape starts with. It grows as needed.
    pub fn set_cell_count(mut self, cell_count: Option<NonZeroUsize>) -> Self {
        self.cell_count = cell_count;
        self
    }

    /// Resolve every bracket pair once up front instead of scanning on each jump.
    pub fn set_precompute_jumps(mut self, precompute_jumps: bool) -> Self {
        self.precompute_jumps = Some(precompute_jumps);
        self
    }

    /// Stops execution with an error once this many instructions have run.
    pub fn set_step_limit(mut self, step_limit: Option<NonZeroUsize>) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Enables or disables detailed state reporting after each instruction is processed.
    pub fn set_report_state(mut self, report_state: bool) -> Self {
        self.report_state = Some(report_state);
        self
    }

    /// Builds and returns a `BoolfuckVM` instance based on the configured options.
    pub fn build(self) -> Result<BoolfuckVM, VMError> {
        let precompute_jumps = self.precompute_jumps.unwrap_or_else(|| {
            log::debug!("Using default bracket scanning, no jump table");
            false
        });

        // Program must be set somehow. A source string wins over a reader, a reader over a file.
        let program = match (self.program_source, self.program_reader, self.program_file) {
            (Some(source), _, _) => Program::parse(&source, precompute_jumps),
            (None, Some(reader), _) => Program::new(reader, precompute_jumps)?,
            (None, None, Some(program_file)) => {
                let file = File::open(&program_file).map_err(|err| {
                    let err = VMError::BuilderError {
                        reason: format!(
                            "Failed to open program file {}: {}",
                            program_file.display(),
                            err
                        ),
                    };
                    log::error!("{}", err);
                    err
                })?;
                Program::new(BufReader::new(file), precompute_jumps)?
            }
            (None, None, None) => {
                return Err(VMError::BuilderError {
                    reason: "Program must be set by using set_program, set_program_reader or set_program_file"
                        .to_string(),
                })
            }
        };

        let input = self.input.unwrap_or_else(|| {
            log::debug!("Using default empty input");
            Vec::new()
        });

        let cell_count = self.cell_count.unwrap_or_else(|| {
            log::debug!("Using default cell count {}", DEFAULT_CELL_COUNT);
            DEFAULT_CELL_COUNT
        });

        // If set, interpret will trace the state after each step and capture the final state.
        // This is useful for debugging and testing but makes the program slower.
        let report_state = self.report_state.unwrap_or_else(|| {
            log::debug!("Using default no state reporting");
            false
        });

        Ok(BoolfuckVM::new(
            program,
            cell_count,
            BitStream::from_bytes(&input),
            self.step_limit,
            report_state,
        ))
    }
}
