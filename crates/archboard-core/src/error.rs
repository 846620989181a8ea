pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown direction: {raw} (expected LR, RL, TB, TD, or BT)")]
    UnknownDirection { raw: String },
}
