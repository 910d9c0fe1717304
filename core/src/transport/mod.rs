//! Concrete `Transport` implementations, one per HTTP library.

use std::time::Duration;

#[cfg(feature = "reqwest-transport")]
mod reqwest_impl;
#[cfg(feature = "ureq-transport")]
mod ureq_impl;

#[cfg(feature = "reqwest-transport")]
pub use reqwest_impl::ReqwestTransport;
#[cfg(feature = "ureq-transport")]
pub use ureq_impl::UreqTransport;

/// Connect and read timeouts applied by every transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Duration,
    pub read: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(5),
            read: Duration::from_secs(30),
        }
    }
}
