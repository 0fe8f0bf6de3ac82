//! 定义了库中所有可能的错误类型。
//! Defines all possible error types in the library.

use thiserror::Error;

/// The primary error type for the session library.
/// 会话库的主要错误类型。
///
/// Only parsing and validation of LoRaWAN primitives can fail; the session
/// and its uplink history operations are total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input was not valid hexadecimal.
    /// 输入不是有效的十六进制。
    #[error("invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// The decoded value does not have the number of bytes the type requires.
    /// 解码后的字节数与类型要求不符。
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A channel frequency is not a multiple of 100 Hz.
    /// 信道频率不是 100 Hz 的整数倍。
    #[error("frequency {0} Hz is not a multiple of 100 Hz")]
    InvalidFrequency(u32),

    /// A channel frequency does not fit the 24-bit CFList encoding.
    /// 信道频率超出 CFList 的 24 位编码范围。
    #[error("frequency {0} Hz exceeds the CFList encoding range")]
    FrequencyOutOfRange(u32),
}

/// A specialized `Result` type for this library.
/// 本库专用的 `Result` 类型。
pub type Result<T> = std::result::Result<T, Error>;
