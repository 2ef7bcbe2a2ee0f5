//! Entry: a stored slot that is either a real element or a placeholder.

/// A single slot in the store's ordered contents.
///
/// Placeholders are skeleton records standing in for content that has not
/// arrived yet. They are never registered in the identity index and are
/// removed as a unit on the first real insertion attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry<T> {
    Real(T),
    Placeholder(Placeholder<T>),
}

/// A skeleton record materialized at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placeholder<T> {
    /// Position of this placeholder at creation time.
    pub index: usize,
    /// Caller-seeded partial data for this slot, if any.
    pub seed: Option<T>,
}

impl<T> Entry<T> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Entry::Placeholder(_))
    }

    /// The real element, or `None` for a placeholder.
    pub fn as_real(&self) -> Option<&T> {
        match self {
            Entry::Real(element) => Some(element),
            Entry::Placeholder(_) => None,
        }
    }

    pub fn as_placeholder(&self) -> Option<&Placeholder<T>> {
        match self {
            Entry::Real(_) => None,
            Entry::Placeholder(placeholder) => Some(placeholder),
        }
    }
}
