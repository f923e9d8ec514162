//! Environment settings and credential loading.
//!
//! Two sources feed the suite: embedded per-environment JSON documents
//! (base URL, explicit-wait timeout, performance threshold) selected by
//! [`Environment`], and login credentials read from the process environment
//! or a local `.env` file, cached behind [`SecretStore`].

pub mod environment;
pub mod secrets;

pub use environment::{EnvConfig, Environment};
pub use secrets::{Credentials, SecretStore};
