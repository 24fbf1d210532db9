use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShortlistError {
    #[error("Composite specification needs at least one child")]
    EmptyComposite,

    #[error("Candidate name must not be empty")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, ShortlistError>;
