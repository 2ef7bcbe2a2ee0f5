//! Sectioner: partitions an ordered sequence into contiguous chunks.

/// Chunk size used once explicit sizes run out (or were never configured).
pub const DEFAULT_SECTION_SIZE: usize = 10;

/// One contiguous chunk of a partitioned sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section<I> {
    pub items: Vec<I>,
}

/// Partitions a sequence into sections: equal default-size chunks, or chunks
/// sized by an explicit list.
///
/// Explicit sizes are consumed in order and a size of 0 yields an empty
/// section rather than being skipped. Once the explicit sizes are exhausted,
/// remaining items are chunked by [`DEFAULT_SECTION_SIZE`]. Partitioning
/// stops when the items run out; no trailing empty sections are emitted.
#[derive(Clone, Debug, Default)]
pub struct Sectioner {
    sizes: Option<Vec<usize>>,
}

impl Sectioner {
    pub fn new(sizes: Option<Vec<usize>>) -> Self {
        Self { sizes }
    }

    pub fn partition<I>(&self, items: impl IntoIterator<Item = I>) -> Vec<Section<I>> {
        let mut rest = items.into_iter().peekable();
        let mut sizes = self.sizes.as_deref().unwrap_or(&[]).iter().copied();
        let mut sections = Vec::new();
        while rest.peek().is_some() {
            // A zero size emits an empty section and moves on to the next
            // configured size; the default size keeps this loop finite.
            let take = sizes.next().unwrap_or(DEFAULT_SECTION_SIZE);
            let items: Vec<I> = rest.by_ref().take(take).collect();
            sections.push(Section { items });
        }
        sections
    }
}
