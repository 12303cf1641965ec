use std::fmt::Display;
use std::path::PathBuf;

pub trait ErrorType: Display + PartialEq {}

#[derive(Debug, PartialEq, Clone)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize
}

impl Location {
    pub fn new(file: PathBuf, line: usize) -> Self {
        Location { file, line }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Grammars parsed from memory have no file to point at
        let has_file = !self.file.as_os_str().is_empty();
        match (has_file, self.line) {
            (true, 0) => write!(f, "{}", self.file.display()),
            (true, line) => write!(f, "{}:{}", self.file.display(), line),
            (false, 0) => write!(f, "<input>"),
            (false, line) => write!(f, "line {}", line),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}

impl<T: ErrorType + std::fmt::Debug> std::error::Error for Error<T> {}

pub type Errors<T> = Vec<Error<T>>;
