#![deny(clippy::expect_used, clippy::unwrap_used)]

//! The root of the LoRaWAN session state library.
//! LoRaWAN 会话状态库的根。
//!
//! A [`Session`] holds the state a network server keeps for an activated
//! device, including a bounded history of recent uplinks from which the
//! packet-loss estimate is derived.

pub mod cflist;
pub mod config;
pub mod error;
pub mod primitives;
pub mod session;

pub use error::{Error, Result};
pub use session::{
    history::{AppendOutcome, UplinkHistory, UplinkHistoryEntry, UPLINK_HISTORY_CAPACITY},
    RxWindow, Session,
};
