//! The seam between the runtime loop and handler code
//!
//! Any function with the signature
//! `fn(&InvocationEvent, &InvocationContext) -> Response` is a [`Handler`],
//! so handler crates only write a plain `handle` function.
//!
//! # Example
//!
//! ```ignore
//! use function_url_sdk::prelude::*;
//!
//! pub fn handle(_event: &InvocationEvent, _context: &InvocationContext) -> Response {
//!     Response::ok(&json!({"message": "Hello!"}))
//! }
//! ```

use crate::{InvocationContext, InvocationEvent, Response};

/// Something that can answer an invocation
pub trait Handler {
    fn handle(&self, event: &InvocationEvent, context: &InvocationContext) -> Response;
}

impl<F> Handler for F
where
    F: Fn(&InvocationEvent, &InvocationContext) -> Response,
{
    fn handle(&self, event: &InvocationEvent, context: &InvocationContext) -> Response {
        self(event, context)
    }
}
