//! Step Wizard
//!
//! Linear position over a fixed, ordered list of steps. Gating on
//! validation is the caller's job; the wizard only keeps the index in range.

/// Position within an ordered step list (never empty)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wizard<S: 'static> {
    steps: &'static [S],
    index: usize,
}

impl<S: Copy + PartialEq + 'static> Wizard<S> {
    /// Start at the first step.
    ///
    /// # Panics
    /// If `steps` is empty.
    pub fn new(steps: &'static [S]) -> Self {
        assert!(!steps.is_empty(), "a wizard needs at least one step");
        Self { steps, index: 0 }
    }

    pub fn current(&self) -> S {
        self.steps[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &'static [S] {
        self.steps
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.steps.len()
    }

    /// Move forward one step; returns false on the last step
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Move back one step; returns false on the first step
    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Whether `step` comes before the current one
    pub fn is_completed(&self, step: S) -> bool {
        self.steps[..self.index].contains(&step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: &[&str] = &["one", "two", "three"];

    #[test]
    fn test_bounds() {
        let mut wizard = Wizard::new(STEPS);
        assert!(wizard.is_first());
        assert!(!wizard.back());
        assert!(wizard.advance());
        assert!(wizard.advance());
        assert!(wizard.is_last());
        assert!(!wizard.advance());
        assert_eq!(wizard.current(), "three");
        assert_eq!(wizard.index(), 2);
    }

    #[test]
    fn test_completed_steps() {
        let mut wizard = Wizard::new(STEPS);
        wizard.advance();
        assert!(wizard.is_completed("one"));
        assert!(!wizard.is_completed("two"));
    }
}
