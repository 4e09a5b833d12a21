use crate::domain::model::ProjectName;
use crate::utils::error::{Result, ScaffoldError};
use std::io::{self, BufRead, Write};

pub const BANNER: &str = "This a Poetry project template generator.\n\
The folder where this script is is considered the new project folder.";

pub const PROMPT: &str = "\nWhat is the name of the main package? ";

/// Prints the prompt to `output` and reads one line from `input`.
pub fn prompt_project_name<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<ProjectName> {
    output
        .write_all(PROMPT.as_bytes())
        .and_then(|_| output.flush())
        .map_err(ScaffoldError::Prompt)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(ScaffoldError::Prompt)?;
    if read == 0 {
        return Err(ScaffoldError::Prompt(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "no project name was entered",
        )));
    }

    ProjectName::from_input_line(&line)
}
