pub mod actions;
pub mod assertions;
pub mod mocks;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use actions::*;
pub use assertions::ReplyAssertion;
#[allow(unused_imports)]
pub use mocks::{MockTransport, MockTransportProbe};
pub use setup::{TestSetup, TestSetupBuilder};
