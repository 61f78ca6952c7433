//! Reading the target name when it was not given on the command line.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::{CliError, CliResult};

/// Text shown before reading the name.
pub const PROMPT: &str = "Enter the name of the new target: ";

/// Ask for the target name on the terminal.
///
/// With the `interactive` feature and a terminal on both ends, the prompt is
/// an editable dialoguer line.  Otherwise one line is read from stdin, so the
/// name can be piped in.
pub fn ask_target_name() -> CliResult<String> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal;

        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            debug!("Prompting with dialoguer");
            return dialoguer::Input::<String>::new()
                .with_prompt(PROMPT.trim_end().trim_end_matches(':'))
                .allow_empty(true)
                .interact_text()
                .map_err(|e| CliError::Prompt {
                    source: io::Error::other(e),
                });
        }
    }

    debug!("Reading target name from stdin");
    let stdin = io::stdin();
    read_name(&mut stdin.lock(), &mut io::stdout())
}

/// Write [`PROMPT`] to `output` and read one line from `input`.
///
/// Only the line terminator is removed; surrounding spaces are part of the
/// name.  End of input before any character is a cancellation.
pub fn read_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> CliResult<String> {
    output
        .write_all(PROMPT.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|source| CliError::Prompt { source })?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|source| CliError::Prompt { source })?;
    if read == 0 {
        return Err(CliError::Cancelled);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
