//! Logging utilities.
//!
//! Library code only talks to the `log` facade. Hosts that want output call
//! [`init_logging`] once; the backend is `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
