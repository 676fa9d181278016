//! Concrete implementations of the trait abstractions.
//!
//! - [`ReqwestHttpClient`] - production HTTP client backed by reqwest
//! - [`mock::MockHttpClient`] - configurable mock for tests

pub mod mock;
pub mod reqwest_http;

pub use reqwest_http::ReqwestHttpClient;
