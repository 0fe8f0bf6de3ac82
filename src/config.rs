//! 定义了新建会话时使用的可配置参数。
//! Defines the configurable parameters applied to a freshly activated session.

use crate::session::RxWindow;

/// A structure containing the defaults for a new session.
///
/// 包含新会话默认值的结构体。
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether frame-counter validation is relaxed for new sessions.
    /// Consumed by the frame validator, not by the session itself.
    /// 新会话是否放宽帧计数器校验。由帧校验方使用，而非会话本身。
    pub relax_fcnt: bool,

    /// Receive-window parameters.
    /// 接收窗口参数。
    pub rx: RxConfig,
}

/// Receive-window parameters.
///
/// 接收窗口相关参数。
#[derive(Debug, Clone)]
pub struct RxConfig {
    /// Which receive window downlinks are scheduled in.
    /// 下行调度使用的接收窗口。
    pub rx_window: RxWindow,
    /// The delay before the first receive window opens, in seconds.
    /// 第一个接收窗口打开前的延迟（秒）。
    pub rx_delay: u8,
    /// The data-rate offset applied in the first receive window.
    /// 第一个接收窗口的数据速率偏移。
    pub rx1_dr_offset: u8,
    /// The data rate used in the second receive window.
    /// 第二个接收窗口使用的数据速率。
    pub rx2_dr: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            relax_fcnt: false,
            rx: RxConfig::default(),
        }
    }
}

impl Default for RxConfig {
    fn default() -> Self {
        Self {
            rx_window: RxWindow::Rx1,
            rx_delay: 1, // RECEIVE_DELAY1
            rx1_dr_offset: 0,
            rx2_dr: 0,
        }
    }
}
