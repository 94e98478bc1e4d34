use crate::error::EmuError;

/// Parsed command-line intent for a single invocation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Opts {
    pub rom_path: String,
    pub verbose: bool,
    pub show_help: bool,
}

impl Opts {
    /// Parse the raw argument list, program name included.
    ///
    /// A help request is only recognized in the first position; anything
    /// else there is taken verbatim as the ROM path. Every later argument
    /// must be a verbose flag, or the whole parse fails.
    pub fn parse(args: &[String]) -> Result<Opts, EmuError> {
        let mut opts = Opts::default();

        let first = match args.get(1) {
            Some(first) => first,
            None => {
                return Err(EmuError::InvalidArgument(
                    "no ROM path was given".to_string(),
                ))
            }
        };

        if first == "-h" || first == "--help" {
            opts.show_help = true;
            return Ok(opts);
        }
        opts.rom_path = first.clone();

        for arg in &args[2..] {
            match arg.as_str() {
                "--verbose" | "-v" => opts.verbose = true,
                unknown => {
                    return Err(EmuError::InvalidArgument(format!(
                        "unrecognized option '{}'",
                        unknown
                    )))
                }
            }
        }

        Ok(opts)
    }
}
