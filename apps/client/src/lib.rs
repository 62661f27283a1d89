//! Client core for the recruitment-management app: a typed API gateway over
//! the backend REST service plus the pure derivation layer (aggregation,
//! comparison, presentation formatting) that the UI renders from.
//!
//! The crate deliberately contains no rendering or routing code. Screens call
//! [`ApiClient`] for data, feed the results through [`analytics`] and
//! [`comparison`], and format the derived values with [`present`].

pub mod analytics;
pub mod api;
pub mod comparison;
pub mod config;
pub mod errors;
pub mod forms;
pub mod invalidate;
pub mod models;
pub mod present;
pub mod session;

pub use api::ApiClient;
pub use config::Config;
pub use errors::ClientError;
pub use session::Session;
