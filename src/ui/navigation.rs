//! Screen stack.

use crate::model::Fighter;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Home,
    /// Fighter detail screen; carries the full record as payload.
    FighterScreen { fighter: Box<Fighter> },
}

static HOME: Route = Route::Home;

/// Stack of routes. The root is always [`Route::Home`].
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(depth = self.stack.len() + 1, "Navigate");
        self.stack.push(route);
    }

    /// Pop the current screen. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    pub fn current(&self) -> &Route {
        // stack is never empty
        self.stack.last().unwrap_or(&HOME)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
