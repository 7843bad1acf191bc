// SPDX-License-Identifier: MPL-2.0
//! Two-screen navigation driven by one-shot events.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Home,
    Video,
}

/// Request to show a screen.
///
/// Only the pick gateway creates these and [`Router::navigate`] takes them by
/// value, so each event moves the router at most once.
#[derive(Debug)]
pub struct NavigationEvent {
    target: Screen,
}

impl NavigationEvent {
    pub(crate) fn show_video() -> Self {
        Self {
            target: Screen::Video,
        }
    }
}

/// Back stack of screens, `Home` at the root.
#[derive(Debug)]
pub struct Router {
    stack: Vec<Screen>,
    navigations: usize,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Home],
            navigations: 0,
        }
    }

    #[must_use]
    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Home)
    }

    /// Consumes `event` and moves to its target.
    pub fn navigate(&mut self, event: NavigationEvent) {
        if self.current() != event.target {
            self.stack.push(event.target);
        }
        self.navigations += 1;
    }

    /// Pops the current screen. Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Number of navigation events consumed so far.
    #[must_use]
    pub fn navigation_count(&self) -> usize {
        self.navigations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home() {
        let router = Router::new();
        assert_eq!(router.current(), Screen::Home);
        assert_eq!(router.navigation_count(), 0);
    }

    #[test]
    fn navigate_then_back_returns_home() {
        let mut router = Router::new();
        router.navigate(NavigationEvent::show_video());
        assert_eq!(router.current(), Screen::Video);

        assert!(router.back());
        assert_eq!(router.current(), Screen::Home);
        assert!(!router.back());
        assert_eq!(router.current(), Screen::Home);
    }

    #[test]
    fn repeated_event_while_on_target_does_not_grow_stack() {
        let mut router = Router::new();
        router.navigate(NavigationEvent::show_video());
        router.navigate(NavigationEvent::show_video());

        assert_eq!(router.navigation_count(), 2);
        assert!(router.back());
        assert_eq!(router.current(), Screen::Home);
    }
}
