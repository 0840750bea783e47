use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifierError {
    /// The classifier has no analysis for this kind of input.
    #[error("{classifier} cannot analyze {input} input")]
    Unsupported {
        classifier: &'static str,
        input: &'static str,
    },
    #[error("input is empty")]
    EmptyInput,
}
