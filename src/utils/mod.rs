pub mod paths;

use std::sync::Once;

use chrono::{Local, Utc};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("daybook_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Current wall-clock time as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Today's calendar date in `YYYY-MM-DD` form, local time.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
