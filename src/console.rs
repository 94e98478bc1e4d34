#[cfg(test)]
use mockall::{automock, predicate::*};

/// Destination for user-facing output lines.
#[cfg_attr(test, automock)]
pub trait Console {
    fn write_line(&self, line: &str);
}

/// Console backed by the process standard output.
pub struct StdConsole;

impl Console for StdConsole {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}
