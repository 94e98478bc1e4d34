use crate::console::Console;

// Shown for -h/--help and after any failed parse
const USAGE: [&str; 5] = [
    "chip8emu is an emulator for the chip 8 VM.",
    "The only required argument is the input .rom file.",
    "Here are the supported options:",
    "   --verbose | -v -- verbose output",
    "   --help | -h -- displays this help screen",
];

/// Write the usage screen, one line at a time.
pub fn show_help(console: &dyn Console) {
    for line in USAGE.iter() {
        console.write_line(line);
    }
}
