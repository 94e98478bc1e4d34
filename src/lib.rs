pub mod console;
pub mod error;
pub mod help;
pub mod opts;

use crate::console::Console;
use crate::error::EmuError;
use crate::opts::Opts;

/// How a completed invocation should be reported to the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    UsageError,
}

/// Parse the raw argument list and act on it.
///
/// A failed parse is not a fault: the help screen is shown and the caller
/// is told to exit with a failure status. The ROM named by a successful
/// parse is echoed but never opened.
pub fn run(args: &[String], console: &dyn Console) -> Result<RunStatus, EmuError> {
    let opts = match Opts::parse(args) {
        Ok(opts) => opts,
        Err(_) => {
            help::show_help(console);
            return Ok(RunStatus::UsageError);
        }
    };

    if opts.show_help {
        help::show_help(console);
        return Ok(RunStatus::Success);
    }

    console.write_line(&format!("Reading from '{}'", opts.rom_path));
    console.write_line(&format!("Verbose: {}", opts.verbose));

    Ok(RunStatus::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::MockConsole;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn missing_arguments_show_help_and_fail() {
        let mut console = MockConsole::new();
        console.expect_write_line().times(5).returning(|_| ());

        let status = run(&args(&["chip8emu"]), &console).unwrap();

        assert_eq!(RunStatus::UsageError, status);
    }

    #[test]
    fn help_request_shows_help_and_succeeds() {
        let mut console = MockConsole::new();
        console
            .expect_write_line()
            .with(eq("chip8emu is an emulator for the chip 8 VM."))
            .times(1)
            .returning(|_| ());
        console.expect_write_line().times(4).returning(|_| ());

        let status = run(&args(&["chip8emu", "--help"]), &console).unwrap();

        assert_eq!(RunStatus::Success, status);
    }

    #[test]
    fn rom_path_and_verbose_are_echoed_in_order() {
        let mut console = MockConsole::new();
        let mut seq = Sequence::new();
        console
            .expect_write_line()
            .with(eq("Reading from 'game.rom'"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| ());
        console
            .expect_write_line()
            .with(eq("Verbose: false"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| ());

        let status = run(&args(&["chip8emu", "game.rom"]), &console).unwrap();

        assert_eq!(RunStatus::Success, status);
    }

    #[test]
    fn verbose_flag_is_echoed() {
        let mut console = MockConsole::new();
        console
            .expect_write_line()
            .with(eq("Reading from 'game.rom'"))
            .times(1)
            .returning(|_| ());
        console
            .expect_write_line()
            .with(eq("Verbose: true"))
            .times(1)
            .returning(|_| ());

        let status = run(&args(&["chip8emu", "game.rom", "-v"]), &console).unwrap();

        assert_eq!(RunStatus::Success, status);
    }

    #[test]
    fn unrecognized_option_shows_help_and_fails() {
        let mut console = MockConsole::new();
        console.expect_write_line().times(5).returning(|_| ());

        let status = run(&args(&["chip8emu", "game.rom", "--bogus"]), &console).unwrap();

        assert_eq!(RunStatus::UsageError, status);
    }
}
