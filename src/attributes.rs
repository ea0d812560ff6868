// gldrawable/src/attributes.rs
//
//! Key/value attribute lists, as consumed by `eglChooseConfig()`, `glXChooseFBConfig()` and
//! friends.

use std::fmt::{self, Debug, Formatter};
use std::os::raw::c_int;

/// The maximum number of key/value pairs an attribute list may hold.
pub const MAX_ATTRIBUTES: usize = 256;

/// An ordered list of `(key, value)` pairs flattened into a single buffer, closed by a
/// platform-specific end marker.
///
/// The attribute set is statically determined by the capability fields, so overflowing the
/// buffer is a bug, not a runtime condition, and panics.
#[derive(Clone, PartialEq, Eq)]
pub struct AttributeList {
    words: Vec<c_int>,
    terminated: bool,
}

impl AttributeList {
    pub fn new() -> AttributeList {
        AttributeList { words: Vec::with_capacity(MAX_ATTRIBUTES * 2 + 1), terminated: false }
    }

    /// Appends a pair.
    ///
    /// Panics if the list is full or already terminated.
    pub fn push(&mut self, key: c_int, value: c_int) {
        assert!(!self.terminated, "Attribute list was already terminated!");
        assert!(self.len() < MAX_ATTRIBUTES, "Attribute list capacity exceeded!");
        self.words.push(key);
        self.words.push(value);
    }

    /// Closes the list with the given end marker.
    pub fn terminate(mut self, end: c_int) -> AttributeList {
        assert!(!self.terminated, "Attribute list was already terminated!");
        self.words.push(end);
        self.terminated = true;
        self
    }

    /// The number of key/value pairs, not counting the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs_slice().len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// The flattened buffer, including the terminator if there is one.
    #[inline]
    pub fn as_slice(&self) -> &[c_int] {
        &self.words
    }

    /// Returns the value of the first pair with the given key.
    pub fn get(&self, key: c_int) -> Option<c_int> {
        self.pairs().find(|&(k, _)| k == key).map(|(_, value)| value)
    }

    #[inline]
    pub fn contains_key(&self, key: c_int) -> bool {
        self.get(key).is_some()
    }

    pub fn pairs(&self) -> impl Iterator<Item = (c_int, c_int)> + '_ {
        self.pairs_slice().chunks(2).map(|pair| (pair[0], pair[1]))
    }

    fn pairs_slice(&self) -> &[c_int] {
        if self.terminated {
            &self.words[..self.words.len() - 1]
        } else {
            &self.words
        }
    }
}

impl Default for AttributeList {
    fn default() -> AttributeList {
        AttributeList::new()
    }
}

impl Debug for AttributeList {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_map().entries(self.pairs().map(|(k, v)| (format!("{:#x}", k), v))).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{AttributeList, MAX_ATTRIBUTES};

    #[test]
    fn test_terminator_is_not_a_pair() {
        let mut list = AttributeList::new();
        list.push(0x3024, 8);
        list.push(0x3023, 8);
        let list = list.terminate(0x3038);
        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice(), &[0x3024, 8, 0x3023, 8, 0x3038]);
        assert_eq!(list.get(0x3023), Some(8));
        assert_eq!(list.get(0x3038), None);
    }

    #[test]
    fn test_fills_to_capacity() {
        let mut list = AttributeList::new();
        for key in 0..MAX_ATTRIBUTES {
            list.push(key as i32, 1);
        }
        assert_eq!(list.terminate(0).len(), MAX_ATTRIBUTES);
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_overflow_panics() {
        let mut list = AttributeList::new();
        for key in 0..(MAX_ATTRIBUTES + 1) {
            list.push(key as i32, 1);
        }
    }

    #[test]
    #[should_panic(expected = "already terminated")]
    fn test_push_after_terminate_panics() {
        let mut list = AttributeList::new().terminate(0);
        list.push(1, 1);
    }
}
