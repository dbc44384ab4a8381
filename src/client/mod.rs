//! Client side of the relay: request composition, caching and transport

mod composer;
mod transport;

pub use composer::{Advice, AdviceClient};
pub use transport::{HttpRelayTransport, RelayTransport, RELAY_LABEL};

#[cfg(test)]
pub use transport::mock::MockRelayTransport;
