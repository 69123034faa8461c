//! Recursive diagnostic rendering of states and spaces.

use std::fmt;

/// Indented, human-readable text dump of a possibly nested value.
///
/// Composite nodes emit a `begin`/`end` marker pair and indent their
/// children by two spaces; leaf nodes emit a single descriptive line.
/// The output is a debugging aid, not a stable format.
pub trait Render {
    /// Write the rendering of `self` at the given indent level.
    fn render(&self, out: &mut dyn fmt::Write, indent: usize) -> fmt::Result;

    /// Render to a fresh string at indent level zero.
    fn render_to_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render(&mut out, 0);
        out
    }
}
