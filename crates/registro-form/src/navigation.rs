//! Hand-off to the confirmation view

use anyhow::Result;

/// Moves the user to another view
pub trait Navigator {
    fn go_to(&mut self, view: &str) -> Result<()>;
}

/// Navigator that only remembers where it was sent
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Vec<String>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last destination, if any
    pub fn current(&self) -> Option<&str> {
        self.visited.last().map(String::as_str)
    }

    pub fn visited(&self) -> &[String] {
        &self.visited
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&mut self, view: &str) -> Result<()> {
        self.visited.push(view.to_string());
        Ok(())
    }
}

impl<N: Navigator + ?Sized> Navigator for Box<N> {
    fn go_to(&mut self, view: &str) -> Result<()> {
        (**self).go_to(view)
    }
}
