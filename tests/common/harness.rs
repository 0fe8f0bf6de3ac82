//! tests/common/harness.rs
use lorawan_session::{
    config::Config,
    primitives::{Aes128Key, DevAddr, Eui64},
    Session, UplinkHistoryEntry,
};
use std::sync::Once;

/// Initializes tracing for tests, ensuring it's only done once.
pub fn init_tracing() {
    static TRACING_INIT: Once = Once::new();
    TRACING_INIT.call_once(|| {
        let filter = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "lorawan_session=trace".to_string());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Creates a session for a device activated with the default configuration.
pub fn activated_session() -> Session {
    init_tracing();
    Session::new(
        "26011bda".parse::<DevAddr>().unwrap(),
        "70b3d57ed0000001".parse::<Eui64>().unwrap(),
        "0004a30b001c0530".parse::<Eui64>().unwrap(),
        "2b7e151628aed2a6abf7158809cf4f3c".parse::<Aes128Key>().unwrap(),
        &Config::default(),
    )
}

/// Builds a history entry as the uplink decoder would report it.
pub fn uplink(fcnt: u32, max_snr: f64, gateway_count: usize) -> UplinkHistoryEntry {
    UplinkHistoryEntry {
        fcnt,
        max_snr,
        gateway_count,
    }
}
