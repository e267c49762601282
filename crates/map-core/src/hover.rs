#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hover {
    Enter,
    Leave,
}

/// Inline background for a modal section in the given hover state.
/// An empty string clears the inline value.
#[inline]
pub fn section_background(hover: Hover, tint: &str) -> &str {
    match hover {
        Hover::Enter => tint,
        Hover::Leave => "",
    }
}
