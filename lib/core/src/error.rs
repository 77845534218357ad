use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot fit vector space: catalog contains no usable text")]
    EmptyCorpus,

    #[error("Vector space not fitted: initialize the engine before ranking or grouping")]
    NotFitted,

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
}
