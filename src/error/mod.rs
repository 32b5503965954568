//! Error handling for the admin dashboard.
//!
//! - [`ApiError`]: the single normalized shape every backend failure
//!   collapses into (`message`, `status`, `code`).
//! - [`ValidationError`]: a settings patch that violates a field contract.
//! - [`AdminError`]: what store operations return; its `Display` is the
//!   message kept in a store's error slot.
//!
//! | Failure | status | code |
//! |---------|--------|------|
//! | timeout | 500 | `ECONNABORTED` |
//! | connection/transport | 500 | `ERR_NETWORK` |
//! | 4xx | actual | `ERR_BAD_REQUEST` |
//! | 5xx | actual | `ERR_BAD_RESPONSE` |
//! | bad 2xx body | actual | `ERR_DECODE` |

mod admin;
mod api;
mod validation;

pub use admin::{AdminError, AdminResult};
pub use api::{
    ApiError, ApiErrorKind, CODE_BAD_REQUEST, CODE_BAD_RESPONSE, CODE_DECODE, CODE_INVALID_URL,
    CODE_NETWORK, CODE_TIMEOUT, NO_RESPONSE_STATUS,
};
pub use validation::ValidationError;
