//! Preload aggressiveness per feed item.
//!
//! Only the active item is worth network cost: it preloads eagerly so
//! playback can begin immediately, everything off-screen stays cold. This is
//! a hint to the media element, not a correctness rule.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadHint {
    /// Fetch enough to begin playback immediately.
    Auto,
    /// No fetching for off-screen items.
    None,
}

impl PreloadHint {
    /// Hint for the item at `index` given the current active slot.
    pub fn for_item(index: usize, active: Option<usize>) -> Self {
        if active == Some(index) {
            PreloadHint::Auto
        } else {
            PreloadHint::None
        }
    }

    /// Value for the `preload` attribute of a media element.
    pub fn as_attr(&self) -> &'static str {
        match self {
            PreloadHint::Auto => "auto",
            PreloadHint::None => "none",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_active_item_preloads() {
        assert_eq!(PreloadHint::for_item(2, Some(2)), PreloadHint::Auto);
        assert_eq!(PreloadHint::for_item(1, Some(2)), PreloadHint::None);
        assert_eq!(PreloadHint::for_item(3, Some(2)), PreloadHint::None);
        assert_eq!(PreloadHint::for_item(0, None), PreloadHint::None);
    }

    #[test]
    fn hints_render_as_preload_attribute_values() {
        assert_eq!(PreloadHint::Auto.as_attr(), "auto");
        assert_eq!(PreloadHint::None.as_attr(), "none");
    }
}
