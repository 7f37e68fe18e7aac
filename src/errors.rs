use thiserror::Error;


#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error{
    #[error("capacity cannot be negative, got {capacity}")]
    InvalidArgument{
        capacity: isize,
    },
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange{
        index: usize,
        len: usize,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
