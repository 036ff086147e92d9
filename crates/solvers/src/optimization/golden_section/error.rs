/// Errors that can occur during golden section search.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("bracket [{left}, {right}] must be finite with left < right")]
    InvalidBracket { left: f64, right: f64 },
}
