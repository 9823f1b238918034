//! The working palette a user assembles colors into.
//!
//! The palette lives with the caller, typically a UI layer; this module only
//! defines the mutation interface the rest of the system programs against
//! and a simple in-memory implementation for tests and demos.

use crate::Color;

/// A mutable, ordered list of named colors.
pub trait PaletteStore {
    /// Add the color under a freshly generated name, returning its index.
    fn add(&mut self, color: Color) -> usize;

    /// Remove the entry at the index, returning it. Out-of-bounds indices
    /// are a no-op.
    fn remove(&mut self, index: usize) -> Option<(String, Color)>;

    /// Remove all entries.
    fn remove_all(&mut self);

    /// Rename the entry at the index, returning whether the index was
    /// valid.
    fn rename(&mut self, index: usize, name: &str) -> bool;
}

// --------------------------------------------------------------------------------------------------------------------

/// An in-memory palette.
///
/// Freshly added colors are named `Color 1`, `Color 2`, and so on. The
/// counter only resets when the palette is cleared, so removing an entry
/// never causes a later addition to reuse its name.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPalette {
    entries: Vec<(String, Color)>,
    next_name: usize,
}

impl InMemoryPalette {
    /// Create a new, empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Determine whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Access the entries in insertion order.
    pub fn entries(&self) -> &[(String, Color)] {
        &self.entries
    }

    /// Iterate over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(String, Color)> {
        self.entries.iter()
    }
}

impl PaletteStore for InMemoryPalette {
    fn add(&mut self, color: Color) -> usize {
        self.next_name += 1;
        self.entries.push((format!("Color {}", self.next_name), color));
        self.entries.len() - 1
    }

    fn remove(&mut self, index: usize) -> Option<(String, Color)> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    fn remove_all(&mut self) {
        self.entries.clear();
        self.next_name = 0;
    }

    fn rename(&mut self, index: usize, name: &str) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.0 = name.to_string();
                true
            }
            None => false,
        }
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{InMemoryPalette, PaletteStore};
    use crate::Color;

    #[test]
    fn test_add_remove_rename() {
        let mut palette = InMemoryPalette::new();
        assert!(palette.is_empty());

        let first = palette.add(Color::srgb(0x31, 0x78, 0xea));
        let second = palette.add(Color::srgb(0xff, 0xca, 0x00));
        assert_eq!((first, second), (0, 1));
        assert_eq!(palette.entries()[0].0, "Color 1");

        assert!(palette.rename(0, "Primary"));
        assert!(!palette.rename(7, "Nope"));
        assert_eq!(palette.entries()[0].0, "Primary");

        let removed = palette.remove(0).unwrap();
        assert_eq!(removed.0, "Primary");
        assert_eq!(palette.len(), 1);
        assert_eq!(palette.remove(7), None);

        // Names never collide with removed entries.
        palette.add(Color::srgb(0, 0, 0));
        assert_eq!(palette.entries()[1].0, "Color 3");

        palette.remove_all();
        assert!(palette.is_empty());
        palette.add(Color::srgb(0, 0, 0));
        assert_eq!(palette.entries()[0].0, "Color 1");
    }
}
