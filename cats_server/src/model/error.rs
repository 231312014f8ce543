use serde::Serialize;

pub type Result<T> = core::result::Result<T, Error>;

pub const MSG_CAT_NOT_FOUND: &str = "Cat not found with the given ID!";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Error {
    CatNotFound { id: String },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}
