mod cli;

use boolf_interp::VMBuilder;
use clap::Parser;
use cli::Cli;
use std::error::Error;
use std::io::{self, Read, Write};
type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Entry point for the Boolfuck interpreter program.
///
/// Runs a built-in program (reverse, by default) or a program file against the
/// input given on the command line, or stdin when there is none, and writes the
/// program's output followed by a newline.
///
/// # Examples
///
/// ```bash
/// $ boolf "Hello, world!"
/// !dlrow ,olleH
/// $ echo -n abc | boolf --program reverse.bool
/// ```
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.self_test {
        let failures = self_test::run_self_test();
        if failures > 0 {
            return Err(format!("{} self-test case(s) failed", failures).into());
        }
        return Ok(());
    }

    let input = match cli.input {
        Some(input) => input.into_bytes(),
        None => {
            log::info!("No input given, reading stdin");
            let mut buffer = Vec::new();
            io::stdin().lock().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let builder = match cli.program {
        Some(program_file) => VMBuilder::new().set_program_file(program_file),
        None => {
            log::info!("Using built-in {:?} program", cli.builtin);
            VMBuilder::new().set_program(cli.builtin.source())
        }
    };

    let mut vm = builder
        .set_input(input)
        .set_cell_count(cli.cell_count)
        .set_precompute_jumps(cli.precompute_jumps)
        .set_step_limit(cli.max_steps)
        .set_report_state(cli.report_state)
        .build()?;

    let final_state = vm.interpret()?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&vm.output_bytes())?;
    writeln!(stdout)?;
    stdout.flush()?;

    if let Some(final_state) = final_state {
        eprintln!("{}", final_state);
    }

    Ok(())
}
