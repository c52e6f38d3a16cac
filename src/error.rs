//! Error types for the flex-array container.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArrayError>;

/// 受检操作（`*_safe`、`update_capacity`、带容量的构造函数）返回的错误。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayError {
    /// 请求的下标不小于当前长度。
    #[error("out of bounds")]
    OutOfBounds,

    /// 请求的容量小于当前容量，容量只能单调增长。
    #[error("cannot decrease capacity")]
    CapacityDecrease,

    /// 构造时请求的容量小于请求的长度。
    #[error("capacity smaller than length")]
    InvalidCapacity,
}
