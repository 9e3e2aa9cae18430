//! The two selectable states of a switch.

use core::fmt;

/// One of the two zones of a switch.
///
/// Identifies both the current selection and which glyph is being drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Choice {
    /// Left zone / first glyph.
    #[default]
    A,
    /// Right zone / second glyph.
    B,
}

impl Choice {
    /// Map the boolean "is A selected" convention onto a choice.
    pub fn from_is_a(is_a: bool) -> Self {
        if is_a { Choice::A } else { Choice::B }
    }

    /// Whether this is [`Choice::A`].
    pub fn is_a(self) -> bool {
        self == Choice::A
    }

    /// The other choice.
    pub fn opposite(self) -> Self {
        match self {
            Choice::A => Choice::B,
            Choice::B => Choice::A,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::A => f.write_str("A"),
            Choice::B => f.write_str("B"),
        }
    }
}
