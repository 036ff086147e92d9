//! Shared objectives for the integration tests.

pub mod test_functions;
