//! The session state of an activated device, as tracked by the network server.
//! 网络服务器为已激活设备维护的会话状态。

pub mod history;

use self::history::{AppendOutcome, UplinkHistory, UplinkHistoryEntry};
use crate::{
    cflist::CfList,
    config::Config,
    primitives::{Aes128Key, DevAddr, Eui64},
};
use std::fmt;
use tracing::debug;

/// Selects which receive window downlinks are scheduled in.
/// 选择下行调度使用的接收窗口。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RxWindow {
    /// The first receive window.
    /// 第一个接收窗口。
    #[default]
    Rx1 = 0,
    /// The second receive window.
    /// 第二个接收窗口。
    Rx2 = 1,
}

impl RxWindow {
    /// 从一个字节尝试转换成 `RxWindow`。
    /// Tries to convert a byte into an `RxWindow`.
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(RxWindow::Rx1),
            1 => Some(RxWindow::Rx2),
            _ => None,
        }
    }
}

impl fmt::Display for RxWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RxWindow::Rx1 => "RX1",
            RxWindow::Rx2 => "RX2",
        };
        write!(f, "{}", s)
    }
}

/// The session of an activated device.
///
/// The identity and the network session key are fixed for the lifetime of
/// the session; re-activation replaces the whole session. The uplink
/// history is only mutated through [`Session::append_uplink_history`].
/// Every other field is owned by the session store and activation logic
/// and may be set directly.
///
/// 已激活设备的会话。身份与网络会话密钥在会话生命周期内不变；
/// 上行历史只能通过 [`Session::append_uplink_history`] 修改。
#[derive(Debug, Clone)]
pub struct Session {
    /// The network-assigned device address.
    /// 网络分配的设备地址。
    pub dev_addr: DevAddr,
    app_eui: Eui64,
    dev_eui: Eui64,
    nwk_s_key: Aes128Key,
    /// The last seen uplink frame counter.
    /// 最近一次看到的上行帧计数器。
    pub fcnt_up: u32,
    /// The downlink frame counter.
    /// 下行帧计数器。
    pub fcnt_down: u32,
    /// Relaxed frame-counter validation, for devices that reset their counters.
    /// 放宽帧计数器校验，用于会重置计数器的设备。
    pub relax_fcnt: bool,

    pub rx_window: RxWindow,
    pub rx_delay: u8,
    pub rx1_dr_offset: u8,
    pub rx2_dr: u8,

    uplink_history: UplinkHistory,
    /// Optional channel frequency override.
    /// 可选的信道频率覆盖。
    pub cf_list: Option<CfList>,
}

impl Session {
    /// Creates the session of a freshly activated device.
    ///
    /// Counters start at zero, the history is empty and the RX parameters
    /// come from `config`.
    ///
    /// 为刚激活的设备创建会话。
    pub fn new(
        dev_addr: DevAddr,
        app_eui: Eui64,
        dev_eui: Eui64,
        nwk_s_key: Aes128Key,
        config: &Config,
    ) -> Self {
        debug!(%dev_addr, %dev_eui, "Creating session");
        Self {
            dev_addr,
            app_eui,
            dev_eui,
            nwk_s_key,
            fcnt_up: 0,
            fcnt_down: 0,
            relax_fcnt: config.relax_fcnt,
            rx_window: config.rx.rx_window,
            rx_delay: config.rx.rx_delay,
            rx1_dr_offset: config.rx.rx1_dr_offset,
            rx2_dr: config.rx.rx2_dr,
            uplink_history: UplinkHistory::new(),
            cf_list: None,
        }
    }

    pub fn app_eui(&self) -> Eui64 {
        self.app_eui
    }

    pub fn dev_eui(&self) -> Eui64 {
        self.dev_eui
    }

    pub fn nwk_s_key(&self) -> &Aes128Key {
        &self.nwk_s_key
    }

    pub fn uplink_history(&self) -> &UplinkHistory {
        &self.uplink_history
    }

    /// Records an uplink transmission in the session's history.
    ///
    /// See [`UplinkHistory::push`] for the retransmission and eviction rules.
    ///
    /// 在会话历史中记录一次上行传输。
    pub fn append_uplink_history(&mut self, entry: UplinkHistoryEntry) -> AppendOutcome {
        self.uplink_history.push(entry)
    }

    /// Returns the packet-loss percentage over the uplink history.
    ///
    /// `NaN` when no uplink has been recorded yet.
    ///
    /// 返回上行历史的丢包百分比。
    pub fn packet_loss_percentage(&self) -> f64 {
        self.uplink_history.packet_loss_percentage()
    }
}
