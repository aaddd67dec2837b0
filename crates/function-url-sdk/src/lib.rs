//! Function URL SDK - types and runtime plumbing for function URL handlers
//!
//! A handler is a plain function from an [`InvocationEvent`] and an
//! [`InvocationContext`] to a [`Response`]. The [`ipc`] module hosts it in a
//! process that the platform drives over stdin/stdout.

pub mod body;
pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod ipc;
pub mod response;
pub mod telemetry;

pub mod prelude {
    //! Common imports for function URL handlers
    pub use crate::error::HandlerError;
    pub use crate::event::{InvocationContext, InvocationEvent};
    pub use crate::response::Response;
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use config::RuntimeConfig;
pub use error::HandlerError;
pub use event::{Invocation, InvocationContext, InvocationEvent};
pub use handler::Handler;
pub use response::Response;
