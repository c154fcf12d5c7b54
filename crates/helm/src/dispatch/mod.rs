//! Command routing.
//!
//! A [`Router`] owns a tree of [`Route`]s keyed by name. Dispatch matches a
//! parsed chain against the tree and runs only the deepest matched handler.

mod context;
mod errors;
mod route;
mod router;

pub use context::CommandContext;
pub use errors::{DispatchError, HandlerError, RegistrationError};
pub use route::{HandlerFn, Route, RouteTable};
pub use router::{DispatchOutcome, Resolved, Router};
