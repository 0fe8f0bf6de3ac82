//! Keeps a bounded record of the most recent uplink transmissions of a device
//! and derives the packet-loss estimate from gaps in their frame counters.
//!
//! 维护设备最近上行传输的有界记录，并根据帧计数器的间隙估算丢包率。

use std::collections::VecDeque;
use tracing::{debug, trace};

/// The maximum number of transmissions kept in an uplink history.
/// 上行历史中保留的最大传输记录数。
pub const UPLINK_HISTORY_CAPACITY: usize = 20;

/// Meta-data of a single uplink transmission.
///
/// 单次上行传输的元数据。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UplinkHistoryEntry {
    /// The uplink frame counter of the transmission.
    /// 该传输的上行帧计数器。
    pub fcnt: u32,
    /// The best SNR seen across all gateways that received the transmission.
    /// 所有接收到该传输的网关中最好的信噪比。
    pub max_snr: f64,
    /// The number of gateways that received the transmission.
    /// 接收到该传输的网关数量。
    pub gateway_count: usize,
}

/// What [`UplinkHistory::push`] did with an entry.
///
/// [`UplinkHistory::push`] 对记录的处理结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The entry was appended as a new transmission.
    /// 记录作为新的传输被追加。
    Appended,
    /// The entry was a retransmission with a better SNR and replaced the last entry.
    /// 记录是信噪比更好的重传，替换了最后一条记录。
    Replaced,
    /// The entry was a retransmission without a better SNR and was dropped.
    /// 记录是信噪比没有更好的重传，已被丢弃。
    Discarded,
}

/// The uplink history of a session, ordered by arrival (oldest first).
///
/// The history never holds more than [`UPLINK_HISTORY_CAPACITY`] entries.
/// Retransmissions are only recognised against the most recent entry: a
/// repeated frame counter that arrives after a different one is appended
/// as a separate transmission.
///
/// 会话的上行历史，按到达顺序排列（最旧的在前）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UplinkHistory {
    entries: VecDeque<UplinkHistoryEntry>,
}

impl UplinkHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(UPLINK_HISTORY_CAPACITY),
        }
    }

    /// Records an uplink transmission.
    ///
    /// When the last entry carries the same frame counter, only the
    /// observation with the strictly better SNR is kept. When the history
    /// grows past its capacity, the oldest entries are evicted.
    ///
    /// 记录一次上行传输。若最后一条记录的帧计数器相同，仅保留信噪比严格更好的观测；
    /// 超出容量时淘汰最旧的记录。
    pub fn push(&mut self, entry: UplinkHistoryEntry) -> AppendOutcome {
        let mut outcome = AppendOutcome::Appended;

        if let Some(last) = self.entries.back() {
            if last.fcnt == entry.fcnt {
                if last.max_snr < entry.max_snr {
                    trace!(
                        fcnt = entry.fcnt,
                        old_max_snr = last.max_snr,
                        new_max_snr = entry.max_snr,
                        gateway_count = entry.gateway_count,
                        "Retransmission has better SNR, replacing last entry"
                    );
                    self.entries.pop_back();
                    outcome = AppendOutcome::Replaced;
                } else {
                    trace!(
                        fcnt = entry.fcnt,
                        max_snr = entry.max_snr,
                        kept_max_snr = last.max_snr,
                        "Retransmission discarded"
                    );
                    return AppendOutcome::Discarded;
                }
            }
        }

        if outcome == AppendOutcome::Appended {
            trace!(
                fcnt = entry.fcnt,
                max_snr = entry.max_snr,
                gateway_count = entry.gateway_count,
                "Uplink appended to history"
            );
        }
        self.entries.push_back(entry);

        while self.entries.len() > UPLINK_HISTORY_CAPACITY {
            if let Some(evicted) = self.entries.pop_front() {
                trace!(fcnt = evicted.fcnt, "Oldest uplink evicted from history");
            }
        }

        outcome
    }

    /// Returns the estimated packet loss over the history, as a percentage.
    ///
    /// Every step between consecutive frame counters is expected to be
    /// exactly one; a larger step counts the skipped counters as lost. The
    /// lost count is divided by the number of entries, so the value is not
    /// capped at 100.
    ///
    /// The arithmetic wraps on `u32`: a decreasing or repeated counter pair
    /// wraps around to a huge loss instead of being rejected. An empty
    /// history yields `NaN`; callers decide how to treat it.
    ///
    /// 返回历史记录上估算的丢包百分比。空历史返回 `NaN`。
    pub fn packet_loss_percentage(&self) -> f64 {
        let mut lost_packets: u32 = 0;
        let mut previous: Option<u32> = None;

        for entry in &self.entries {
            if let Some(prev) = previous {
                if entry.fcnt <= prev {
                    debug!(
                        previous_fcnt = prev,
                        fcnt = entry.fcnt,
                        "Non-increasing frame counter in uplink history"
                    );
                }
                // The expected difference between two transmissions is always 1.
                lost_packets = lost_packets.wrapping_add(entry.fcnt.wrapping_sub(prev).wrapping_sub(1));
            }
            previous = Some(entry.fcnt);
        }

        f64::from(lost_packets) / self.entries.len() as f64 * 100.0
    }

    /// Returns the best SNR across the history, or `None` if it is empty.
    ///
    /// 返回历史中最好的信噪比；历史为空时返回 `None`。
    pub fn max_snr(&self) -> Option<f64> {
        self.entries.iter().map(|entry| entry.max_snr).reduce(f64::max)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently recorded transmission.
    pub fn last(&self) -> Option<&UplinkHistoryEntry> {
        self.entries.back()
    }

    /// Iterates over the entries, oldest first.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &UplinkHistoryEntry> + '_ {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a UplinkHistory {
    type Item = &'a UplinkHistoryEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, UplinkHistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
