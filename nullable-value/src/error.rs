pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value was read out of an absent optional.
    /// Check `has_value` first, or use `get_or_else` / `match_with`.
    #[error("attempted to access the value of an absent optional")]
    EmptyValueAccess,
}
