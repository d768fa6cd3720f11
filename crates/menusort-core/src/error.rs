pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `position` that does not split into exactly `<relationship>=<command>`.
    #[error("Malformed position argument {position}")]
    MalformedPosition { position: String },
}
