//! error types

/// The ways an argument can break a precondition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidArgument {
    #[error("person {0} does not exist in this graph")]
    UnknownPerson(u32),
    #[error("the null ID does not refer to a person")]
    NullId,
    #[error("adjacent people must form a set, but person {0} appears more than once")]
    DuplicateAdjacent(u32),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(InvalidArgument),
}

impl From<InvalidArgument> for Error {
    fn from(kind: InvalidArgument) -> Self {
        Error::InvalidArgument(kind)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
