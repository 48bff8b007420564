use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Syntax Error: cannot parse `{0}`")]
    Syntax(String),

    #[error("Unknown destination: `{0}`")]
    UnknownDest(String),

    #[error("Unknown computation: `{0}`")]
    UnknownComp(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Address out of range: `{0}` does not fit in 15 bits")]
    AddressOutOfRange(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

/// An error raised while translating, tied to the source line that caused it.
#[derive(Debug)]
pub struct Diag {
    /// 0-based index into the raw source lines
    pub line_idx: usize,
    pub error: Error,
}

impl Diag {
    pub fn new(line_idx: usize, error: Error) -> Self {
        Diag { line_idx, error }
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print(&self, file: &str, raw: &[&str]) {
        cprintln!("<red,bold>error</>: {}", self.error);
        print_location(file, raw, self.line_idx);
    }
}

/// A non-fatal finding. Never changes the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Label declared twice. The later declaration wins.
    RedefinedLabel {
        name: String,
        line_idx: usize,
        prev_idx: usize,
    },
}

impl Warning {
    pub fn print(&self, file: &str, raw: &[&str]) {
        match self {
            Warning::RedefinedLabel {
                name,
                line_idx,
                prev_idx,
            } => {
                cprintln!("<yellow,bold>warn</>: Re-defined label: `{}`", name);
                print_location(file, raw, *line_idx);
                cprintln!("<green,bold>note</>: Already defined here. The value was overridden.");
                print_location(file, raw, *prev_idx);
            }
        }
    }
}

fn print_location(file: &str, raw: &[&str], line_idx: usize) {
    // line_idx is 0-based, display as 1-based
    let line_num = line_idx + 1;
    cprintln!("     <blue>--></> <underline>{}:{}</>", file, line_num);
    cprintln!("      <blue>|</>");
    let line_content = raw.get(line_idx).copied().unwrap_or("");
    cprintln!(" <blue>{:>4} |</> {}", line_num, line_content);
    cprintln!("      <blue>|</>");
}
