//! Resolution of parsed command chains against the route tree.
//!
//! The router walks the parsed chain and the route tree in lockstep. The
//! deepest matched route runs; its ancestors do not. A chain that outruns the
//! tree fails with the first name that has no route.

use helm_syntax::ParsedCommand;
use tracing::debug;

use super::context::CommandContext;
use super::errors::DispatchError;
use super::route::{Route, RouteTable};
use crate::output::OutputSink;

/// Tracing target for dispatch decisions.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// A route matched against a parsed chain, ready to run.
#[derive(Debug)]
pub struct Resolved<'r, 'c> {
    route: &'r Route,
    node: &'c ParsedCommand,
    path: Vec<String>,
}

impl<'r, 'c> Resolved<'r, 'c> {
    /// The parsed node whose name selected the route.
    #[must_use]
    pub const fn node(&self) -> &'c ParsedCommand {
        self.node
    }

    /// Matched names, root first.
    #[must_use]
    pub fn path(&self) -> &[String] {
        &self.path
    }
}

/// Result of a successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Names of the route that ran, root first.
    pub path: Vec<String>,
}

/// Routes parsed commands to handlers.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: RouteTable,
}

impl Router {
    /// Creates a router over a finished route tree.
    #[must_use]
    pub const fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    /// Top-level routes.
    #[must_use]
    pub const fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Finds the route a parsed chain selects without running it.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownCommand`] when the root name is not
    /// registered, including the empty name of a blank line, and
    /// [`DispatchError::UnknownSubCommand`] when a nested name is not.
    pub fn resolve<'r, 'c>(
        &'r self,
        command: &'c ParsedCommand,
    ) -> Result<Resolved<'r, 'c>, DispatchError> {
        let name = command.name();
        let route = self
            .routes
            .get(name)
            .ok_or_else(|| DispatchError::unknown_command(name))?;
        descend(route, command, vec![name.to_owned()])
    }

    /// Resolves a parsed chain and runs the selected handler exactly once.
    ///
    /// # Errors
    ///
    /// Returns the resolution errors of [`Router::resolve`], or
    /// [`DispatchError::Handler`] when the handler fails.
    pub fn route(
        &self,
        command: &ParsedCommand,
        output: &mut dyn OutputSink,
    ) -> Result<DispatchOutcome, DispatchError> {
        let resolved = self.resolve(command)?;
        debug!(
            target: DISPATCH_TARGET,
            path = %resolved.path.join(" "),
            "dispatching command"
        );

        let mut context = CommandContext::new(command, resolved.node, &resolved.path, output);
        resolved
            .route
            .invoke(&mut context)
            .map_err(|source| DispatchError::handler(resolved.path.clone(), source))?;

        Ok(DispatchOutcome {
            path: resolved.path,
        })
    }
}

fn descend<'r, 'c>(
    route: &'r Route,
    node: &'c ParsedCommand,
    mut path: Vec<String>,
) -> Result<Resolved<'r, 'c>, DispatchError> {
    let Some(sub_command) = node.sub_command() else {
        return Ok(Resolved { route, node, path });
    };
    let name = sub_command.name();
    let Some(child) = route.sub_routes().get(name) else {
        return Err(DispatchError::unknown_sub_command(path, name));
    };
    path.push(name.to_owned());
    descend(child, sub_command, path)
}
