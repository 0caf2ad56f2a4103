//! # Sequences
//!
//! A [`Sequence`] is a finite, 0-indexed, read-only view over elements of one
//! type. The LCS engine only ever needs `len` and random access, so anything
//! that can answer those two questions can be diffed.
//!
//! Two adapters are provided:
//! - [`CharSequence`] over a `&str`, yielding `char`s.
//! - [`ListSequence`] over a slice, yielding `&T`.
//!
//! Neither adapter copies the elements it exposes.
//!
//! # Examples
//!
//! ```
//! use lcsdiff::{CharSequence, ListSequence, Sequence};
//!
//! let chars = CharSequence::new("héllo");
//! assert_eq!(chars.len(), 5);
//! assert_eq!(chars.element_at(1), 'é');
//!
//! let words = ["a", "b", "c"];
//! let list = ListSequence::new(&words);
//! assert_eq!(list.get(2), Some(&"c"));
//! assert_eq!(list.get(3), None);
//! ```

use std::iter::FusedIterator;

use crate::error::{Error, Result};

/// A finite, randomly-indexable ordered view over elements.
///
/// Implementations must keep `len` and the element at each index stable for
/// as long as the value lives.
pub trait Sequence {
    /// Element type handed out by the sequence.
    type Item;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` if `index >= len()`.
    fn get(&self, index: usize) -> Option<Self::Item>;

    /// Returns `true` if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// * `Error::IndexOutOfBounds` - if `index >= len()`
    fn try_element_at(&self, index: usize) -> Result<Self::Item> {
        self.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    fn element_at(&self, index: usize) -> Self::Item {
        match self.try_element_at(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }

    /// Iterates the elements in index order.
    fn iter(&self) -> SequenceIter<'_, Self> {
        SequenceIter {
            sequence: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Collects the elements into a `Vec`, in index order.
    fn to_vec(&self) -> Vec<Self::Item> {
        self.iter().collect()
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, index: usize) -> Option<Self::Item> {
        (**self).get(index)
    }
}

/// Iterator over the elements of a [`Sequence`], created by [`Sequence::iter`].
#[derive(Debug)]
pub struct SequenceIter<'a, S: ?Sized> {
    sequence: &'a S,
    front: usize,
    back: usize,
}

impl<S: Sequence + ?Sized> Iterator for SequenceIter<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.sequence.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for SequenceIter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.sequence.get(self.back)
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for SequenceIter<'_, S> {}

impl<S: Sequence + ?Sized> FusedIterator for SequenceIter<'_, S> {}

/// Character view over a string slice.
///
/// ASCII text is indexed directly on its bytes. For other text the byte
/// offset of every `char` is recorded once, at construction, so that
/// `get` stays O(1).
#[derive(Debug, Clone)]
pub struct CharSequence<'a> {
    text: &'a str,
    /// `None` when `text` is ASCII.
    offsets: Option<Vec<usize>>,
}

impl<'a> CharSequence<'a> {
    /// Wraps `text`.
    pub fn new(text: &'a str) -> Self {
        let offsets = if text.is_ascii() {
            None
        } else {
            Some(text.char_indices().map(|(offset, _)| offset).collect())
        };
        Self { text, offsets }
    }

    /// The wrapped string.
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl<'a> From<&'a str> for CharSequence<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

impl Sequence for CharSequence<'_> {
    type Item = char;

    fn len(&self) -> usize {
        match &self.offsets {
            Some(offsets) => offsets.len(),
            None => self.text.len(),
        }
    }

    fn get(&self, index: usize) -> Option<char> {
        match &self.offsets {
            Some(offsets) => {
                let offset = *offsets.get(index)?;
                self.text[offset..].chars().next()
            }
            None => self.text.as_bytes().get(index).map(|&b| char::from(b)),
        }
    }
}

/// View over a slice, yielding references to its entries.
#[derive(Debug)]
pub struct ListSequence<'a, T> {
    items: &'a [T],
}

impl<'a, T> ListSequence<'a, T> {
    /// Wraps `items`.
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// The wrapped slice.
    pub fn as_slice(&self) -> &'a [T] {
        self.items
    }
}

// Manual impls: a derive would require `T: Clone`.
impl<T> Clone for ListSequence<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListSequence<'_, T> {}

impl<'a, T> From<&'a [T]> for ListSequence<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for ListSequence<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self::new(items.as_slice())
    }
}

impl<'a, T> Sequence for ListSequence<'a, T> {
    type Item = &'a T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&'a T> {
        self.items.get(index)
    }
}
