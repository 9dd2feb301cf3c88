use crate::generators::Generator;

/// Holds the active generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeSelector {
    current: Generator,
}

impl ModeSelector {
    /// Selector starting at `index`, clamped into `0..16`.
    pub fn new(index: usize) -> Self {
        Self {
            current: Self::clamped(index),
        }
    }

    pub fn current(&self) -> Generator {
        self.current
    }

    pub fn index(&self) -> usize {
        self.current.index()
    }

    /// Switch to mode `index`. Returns `false` when that mode was already active.
    pub fn select(&mut self, index: usize) -> bool {
        let next = Self::clamped(index);
        if next == self.current {
            return false;
        }
        self.current = next;
        log::info!("Mode {}: {}", next.index(), next.display_name());
        true
    }

    fn clamped(index: usize) -> Generator {
        let index = index.min(Generator::COUNT - 1);
        Generator::ALL[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_changes_mode() {
        let mut selector = ModeSelector::default();
        assert!(selector.select(7));
        assert_eq!(selector.current(), Generator::LorenzAttractor);
    }

    #[test]
    fn test_reselect_is_noop() {
        let mut selector = ModeSelector::new(3);
        let before = selector;
        assert!(!selector.select(3));
        assert_eq!(selector, before);
    }

    #[test]
    fn test_out_of_range_index_is_clamped() {
        let mut selector = ModeSelector::new(999);
        assert_eq!(selector.index(), 15);
        selector.select(0);
        selector.select(16);
        assert_eq!(selector.current(), Generator::GravityWell);
    }
}
