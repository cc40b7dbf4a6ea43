//! Order lifecycle
//!
//! - [`OrderService`]: validation, pricing, persistence, status changes
//! - [`TransitionPolicy`]: which status changes are allowed
//! - [`money`]: decimal helpers shared by pricing and storage

pub mod error;
pub mod money;
pub mod service;
pub mod status;

pub use error::{OrderError, OrderResult};
pub use service::{OrderService, Report};
pub use status::TransitionPolicy;
