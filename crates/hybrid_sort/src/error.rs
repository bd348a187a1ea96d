use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    /// The caller-supplied length disagrees with the sequence it describes.
    #[error("length {expected} does not match a sequence of {actual} elements")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("unknown sort algorithm `{0}`")]
    UnknownAlgorithm(String),
}
