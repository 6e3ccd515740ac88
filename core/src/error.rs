/// Errors produced while reading or exporting run logs.
#[derive(Debug)]
pub enum LogError {
    FileNotFound(String),
    BadNumber(String),
    NoSamples,
    MissingTerm(String),
    WriteFailed(String),
}
