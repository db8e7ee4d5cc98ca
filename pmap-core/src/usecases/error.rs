use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("The place does not exist")]
    UnknownPlace,
    #[error("The place is not visible under the current filter")]
    PlaceNotVisible,
}
