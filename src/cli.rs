use std::{num::NonZeroUsize, path::PathBuf};

use boolf_interp::programs;
use clap::{Parser, ValueEnum};

/// Run Boolfuck programs on a bit tape
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Input passed to the program. Read from stdin when omitted.
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// Run the Boolfuck program in this file instead of a built-in one
    #[arg(short, long)]
    pub program: Option<PathBuf>,

    /// Built-in program to run when no program file is given
    #[arg(short, long, value_enum, default_value_t = Builtin::Reverse)]
    pub builtin: Builtin,

    /// Specifies the number of cells the tape starts with.
    ///
    /// The tape grows in both directions as needed, this only sets the initial size.
    #[arg(short, long)]
    pub cell_count: Option<NonZeroUsize>,

    /// Resolve all brackets up front instead of scanning on every jump
    #[clap(short = 'j', long)]
    pub precompute_jumps: bool,

    /// Give up after this many instructions
    #[arg(short, long)]
    pub max_steps: Option<NonZeroUsize>,

    /// Print the final state of the VM to stderr
    #[clap(short = 's', long)]
    pub report_state: bool,

    /// Run the built-in programs against known inputs and report the results
    #[clap(long)]
    pub self_test: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// Print the input reversed
    Reverse,
    /// Print "Hello, world!"
    Hello,
    /// Print the first byte of the input
    Echo,
}

impl Builtin {
    pub fn source(&self) -> &'static str {
        match self {
            Builtin::Reverse => programs::REVERSE,
            Builtin::Hello => programs::HELLO_WORLD,
            Builtin::Echo => programs::ECHO_BYTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_reverse() {
        let cli = Cli::parse_from(["boolf", "hello"]);
        assert_eq!(cli.input.as_deref(), Some("hello"));
        assert_eq!(cli.builtin, Builtin::Reverse);
        assert!(cli.program.is_none());
        assert!(!cli.self_test);
    }

    #[test]
    fn parses_options() {
        let cli = Cli::parse_from([
            "boolf", "-b", "hello", "-c", "16", "-j", "-m", "500", "-s",
        ]);
        assert!(cli.input.is_none());
        assert_eq!(cli.builtin, Builtin::Hello);
        assert_eq!(cli.cell_count, NonZeroUsize::new(16));
        assert!(cli.precompute_jumps);
        assert_eq!(cli.max_steps, NonZeroUsize::new(500));
        assert!(cli.report_state);
    }
}
