use std::rc::Rc;

use crate::util::position::Position;

/// A named evaluation frame.
///
/// Frames form a chain from the innermost frame back to the program's root
/// frame, `<MAIN>`. The chain exists for error reporting only: a runtime
/// error records the frame it was raised in, and its traceback walks the
/// chain outward, printing where each frame was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    name:         String,
    parent:       Option<Rc<Self>>,
    parent_entry: Option<Position>,
}

impl Context {
    /// Name of the root frame of every program.
    pub const MAIN: &'static str = "<MAIN>";

    /// Creates a root frame named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name:         name.into(),
               parent:       None,
               parent_entry: None, }
    }

    /// Creates the `<MAIN>` root frame.
    #[must_use]
    pub fn main() -> Self {
        Self::new(Self::MAIN)
    }

    /// Creates a frame nested in `self`, entered from `entry`.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use soch::{interpreter::evaluator::context::Context, util::position::Position};
    ///
    /// let main = Rc::new(Context::main());
    /// let inner = main.child("<inner>", Position::new(4, 0, 4));
    ///
    /// assert_eq!(inner.name(), "<inner>");
    /// assert_eq!(inner.parent().map(|p| p.name()), Some("<MAIN>"));
    /// assert_eq!(inner.parent_entry(), Some(Position::new(4, 0, 4)));
    /// ```
    #[must_use]
    pub fn child(self: &Rc<Self>, name: impl Into<String>, entry: Position) -> Rc<Self> {
        Rc::new(Self { name:         name.into(),
                       parent:       Some(Rc::clone(self)),
                       parent_entry: Some(entry), })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The enclosing frame, if this is not a root frame.
    #[must_use]
    pub const fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }

    /// Where in the enclosing frame this frame was entered.
    #[must_use]
    pub const fn parent_entry(&self) -> Option<Position> {
        self.parent_entry
    }

    /// Number of frames in the chain, this one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        std::iter::successors(Some(self), |frame| frame.parent().map(Rc::as_ref)).count()
    }
}
