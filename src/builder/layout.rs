//! The ordered sequence of tiles the user has assembled.

use super::component::PlacedComponent;

/// Ordered list of placed components. Index order is left-to-right,
/// top-to-bottom order in the preview grid. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    components: Vec<PlacedComponent>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlacedComponent> {
        self.components.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlacedComponent> {
        self.components.iter()
    }

    /// Add a component after the last one. Never fails.
    pub fn append(&mut self, component: PlacedComponent) {
        self.components.push(component);
    }

    /// Move the component at `from` so it ends up at `to`, shifting the
    /// components in between by one.
    ///
    /// Returns false (and leaves the layout untouched) if either index is out
    /// of range or the indices are equal.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.components.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let component = self.components.remove(from);
        self.components.insert(to, component);
        true
    }

    /// Remove the component at `index`, returning it. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<PlacedComponent> {
        if index >= self.components.len() {
            return None;
        }
        Some(self.components.remove(index))
    }
}

impl From<Vec<PlacedComponent>> for Layout {
    fn from(components: Vec<PlacedComponent>) -> Self {
        Self { components }
    }
}
