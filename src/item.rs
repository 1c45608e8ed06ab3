//! Items shown by the carousel and the fixed sequence they live in.

use std::path::Path;

use crate::error::Error;

/// A single image resource. Immutable once the sequence is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub index: usize,
    pub src: String,
    pub alt: String,
}

impl Item {
    pub fn new(index: usize, src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            index,
            src: src.into(),
            alt: alt.into(),
        }
    }

    /// Build an item from a file path, using the file stem as alt text.
    pub fn from_path(index: usize, path: &Path) -> Self {
        let alt = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::new(index, path.to_string_lossy(), alt)
    }
}

/// Ordered, fixed-length list of items. Length never changes after construction.
#[derive(Debug, Clone, Default)]
pub struct ItemSequence {
    items: Vec<Item>,
}

impl ItemSequence {
    /// Wrap `items`, checking that every display index matches its position.
    ///
    /// # Errors
    /// Returns [`Error::IndexMismatch`] for the first out-of-place item.
    pub fn new(items: Vec<Item>) -> Result<Self, Error> {
        if let Some((position, item)) = items
            .iter()
            .enumerate()
            .find(|(position, item)| item.index != *position)
        {
            return Err(Error::IndexMismatch {
                position,
                found: item.index,
            });
        }
        Ok(Self { items })
    }

    /// Build a sequence from `(src, alt)` pairs, assigning display indices in order.
    pub fn from_sources<I, S, A>(sources: I) -> Self
    where
        I: IntoIterator<Item = (S, A)>,
        S: Into<String>,
        A: Into<String>,
    {
        let items = sources
            .into_iter()
            .enumerate()
            .map(|(index, (src, alt))| Item::new(index, src, alt))
            .collect();
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn from_sources_assigns_positions() {
        let seq = ItemSequence::from_sources([("a.jpg", "A"), ("b.jpg", "B")]);
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get(1).unwrap().index, 1);
        assert_eq!(seq.get(1).unwrap().alt, "B");
    }

    #[test]
    fn rejects_out_of_place_index() {
        let err = ItemSequence::new(vec![Item::new(0, "a", "a"), Item::new(5, "b", "b")])
            .unwrap_err();
        match err {
            Error::IndexMismatch { position, found } => {
                assert_eq!((position, found), (1, 5));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn alt_from_file_stem() {
        let item = Item::from_path(3, &PathBuf::from("/photos/beach day.jpg"));
        assert_eq!(item.index, 3);
        assert_eq!(item.alt, "beach day");
        assert!(item.src.ends_with("beach day.jpg"));
    }
}
