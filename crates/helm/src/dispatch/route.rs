//! Route nodes and the tables that hold them.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt;
use std::sync::Arc;

use super::context::CommandContext;
use super::errors::{HandlerError, RegistrationError};

/// Signature shared by every route handler.
pub type HandlerFn = dyn Fn(&mut CommandContext<'_>) -> Result<(), HandlerError> + Send + Sync;

/// A named node of the route tree: one handler plus its nested routes.
///
/// Routes are plain values. A tree is assembled bottom-up with
/// [`Route::with_sub_route`] and then registered in a [`RouteTable`].
#[derive(Clone)]
pub struct Route {
    handler: Arc<HandlerFn>,
    sub_routes: RouteTable,
}

impl Route {
    /// Creates a route with no sub-routes.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&mut CommandContext<'_>) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
            sub_routes: RouteTable::new(),
        }
    }

    /// Adds a nested route under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError`] when `name` is already taken at this
    /// level or could never match a parsed word.
    pub fn with_sub_route(
        mut self,
        name: impl Into<String>,
        route: Self,
    ) -> Result<Self, RegistrationError> {
        self.sub_routes.register(name, route)?;
        Ok(self)
    }

    /// Nested routes, keyed by name.
    #[must_use]
    pub const fn sub_routes(&self) -> &RouteTable {
        &self.sub_routes
    }

    pub(crate) fn invoke(&self, context: &mut CommandContext<'_>) -> Result<(), HandlerError> {
        (self.handler)(context)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("sub_routes", &self.sub_routes)
            .finish_non_exhaustive()
    }
}

/// Routes registered at one level of the tree.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: BTreeMap<String, Route>,
}

impl RouteTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `route` under `name`.
    ///
    /// The first registration of a name wins; later attempts leave the table
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrationError::DuplicateRoute`] when `name` is taken and
    /// [`RegistrationError::InvalidName`] when the parser could never produce
    /// `name` as a bare word.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        route: Route,
    ) -> Result<(), RegistrationError> {
        let name = name.into();
        if !is_routable(&name) {
            return Err(RegistrationError::invalid_name(name));
        }
        match self.routes.entry(name) {
            Entry::Occupied(entry) => Err(RegistrationError::duplicate_route(entry.key().as_str())),
            Entry::Vacant(entry) => {
                entry.insert(route);
                Ok(())
            }
        }
    }

    /// Looks up the route registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Route> {
        self.routes.get(name)
    }

    /// Reports whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// Number of routes at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Reports whether no route is registered at this level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn is_routable(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('-') && !name.contains([' ', '='])
}
