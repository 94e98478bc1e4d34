use std::env;
use std::process::ExitCode;

use chip8emu::console::StdConsole;
use chip8emu::{run, RunStatus};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(&args, &StdConsole) {
        Ok(RunStatus::Success) => ExitCode::SUCCESS,
        Ok(RunStatus::UsageError) => ExitCode::FAILURE,
        Err(fault) => {
            // A reported fault still ends the process normally
            eprintln!("{}", fault.fault_report());
            ExitCode::SUCCESS
        }
    }
}
