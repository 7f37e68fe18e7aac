//! A growable array whose capacity is part of its observable contract.
//!
//! [`DynamicArray`] owns a contiguous run of slots. Appending grows the buffer by doubling once
//! only a single free slot would remain, and removing by index compacts the buffer down to exactly
//! the new length.
//!
//! ```
//! use dyn_array::DynamicArray;
//!
//! let mut array = DynamicArray::new();
//! array.push(1);
//! array.push(2);
//! array.push(3);
//! assert_eq!(array.len(), 3);
//!
//! assert_eq!(array.remove_at(1), Ok(2));
//! assert_eq!(array.get(0), Ok(&1));
//! assert_eq!(array.get(1), Ok(&3));
//! assert_eq!(array.capacity(), 2);
//! assert_eq!(array.to_string(), "[1, 3]");
//! ```


mod errors;
mod iter;

use std::{
    fmt::{
        self,
        Debug,
        Display,
        Formatter,
    },
    iter::repeat_with,
    mem,
    ops::{
        Index,
        IndexMut,
    },
};

use tracing::debug;

pub use errors::{Error, Result};
pub use iter::{IntoIter, Iter};

/// Capacity of an array built with [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// A contiguous growable array with an explicit growth and compaction policy.
///
/// Slots in `[0, len)` always hold a live element, slots in `[len, capacity)` are empty.
///
/// # Growth
/// [`push`](Self::push) reallocates when `len + 1 >= capacity`, i.e. one slot before the buffer is
/// actually full. A capacity of zero becomes one, any other capacity doubles.
///
/// ```
/// use dyn_array::DynamicArray;
///
/// let mut array = DynamicArray::with_capacity(0).unwrap();
/// array.push(10);
/// assert_eq!(array.capacity(), 1);
/// array.push(20);
/// assert_eq!(array.capacity(), 2);
/// array.push(30);
/// assert_eq!(array.capacity(), 4);
/// ```
///
/// # Compaction
/// [`remove_at`](Self::remove_at) always moves the survivors into a fresh buffer of exactly
/// `len - 1` slots, so every removal is *O*(n) and no spare capacity is kept.
///
/// # Iteration
/// [`iter`](Self::iter) borrows the array, so it cannot be mutated while an iterator is alive:
///
/// ```compile_fail
/// use dyn_array::DynamicArray;
///
/// let mut array: DynamicArray<i32> = [1, 2, 3].into_iter().collect();
/// for elem in &array {
///     array.push(*elem);
/// }
/// ```
pub struct DynamicArray<T>{
    storage: Box<[Option<T>]>,
    len: usize,
    capacity: usize,
}

fn empty_slots<T>(count: usize) -> Box<[Option<T>]> {
    repeat_with(|| None).take(count).collect()
}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T> DynamicArray<T> {

    /// Creates an empty array with [`DEFAULT_CAPACITY`].
    ///
    /// Nothing is allocated until the first element is pushed.
    pub fn new() -> Self {
        Self{
            storage: Box::default(),
            len: 0,
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Creates an empty array with exactly `capacity` empty slots.
    ///
    /// Fails with [`Error::InvalidArgument`] when `capacity` is negative.
    pub fn with_capacity(capacity: isize) -> Result<Self> {
        let capacity = usize::try_from(capacity).map_err(|_| Error::InvalidArgument{capacity})?;
        Ok(Self{
            storage: empty_slots(capacity),
            len: 0,
            capacity,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, live or empty.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn live(&self) -> &[Option<T>] {
        &self.storage[..self.len]
    }

    fn out_of_range(&self, index: usize) -> Error {
        Error::IndexOutOfRange{
            index,
            len: self.len,
        }
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.live()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let err = self.out_of_range(index);
        self.storage[..self.len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(err)
    }

    /// Overwrites the element at `index`, returning the one it replaced.
    ///
    /// Length and capacity are left untouched.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Drops every live element. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.storage[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Appends `value`, growing the buffer first when at most one free slot is left.
    pub fn push(&mut self, value: T) {
        if self.len + 1 >= self.capacity {
            let new_capacity = match self.capacity {
                0 => 1,
                capacity => capacity.checked_mul(2).unwrap_or_else(|| capacity_overflow()),
            };
            self.reallocate(new_capacity);
        } else if self.storage.len() != self.capacity {
            // deferred allocation from `new`
            self.reallocate(self.capacity);
        }

        self.storage[self.len] = Some(value);
        self.len += 1;
    }

    fn reallocate(&mut self, new_capacity: usize) {
        debug!(
            len = self.len,
            old_capacity = self.capacity,
            new_capacity,
            "reallocating storage"
        );

        let mut storage = empty_slots(new_capacity);
        for (dst, src) in storage.iter_mut().zip(&mut self.storage[..self.len]) {
            *dst = src.take();
        }
        self.storage = storage;
        self.capacity = new_capacity;
    }

    /// Removes and returns the element at `index`.
    ///
    /// The remaining elements keep their order and are moved into a new buffer whose capacity is
    /// exactly the new length.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let len = self.len;
        let removed = self.storage[..len]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(Error::IndexOutOfRange{index, len})?;

        let new_len = len - 1;
        debug!(
            len,
            old_capacity = self.capacity,
            new_capacity = new_len,
            "compacting storage after removal"
        );

        // the removed slot is now empty, so `take` skips it
        let compacted: Box<[Option<T>]> = self.storage[..len]
            .iter_mut()
            .filter_map(Option::take)
            .map(Some)
            .collect();

        self.storage = compacted;
        self.capacity = new_len;
        self.len = new_len;
        Ok(removed)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.live())
    }
}

impl<T: PartialEq> DynamicArray<T> {

    /// Position of the first element equal to `value`.
    ///
    /// For arrays of `Option<U>`, searching for `None` finds the first stored `None`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|elem| elem == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`. Returns whether anything was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self{
            storage: self.storage.clone(),
            len: self.len,
            capacity: self.capacity,
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {

    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(elem) => elem,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.storage, self.len)
    }
}

impl<T:Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("DynamicArray")
           .field("len", &self.len)
           .field("capacity", &self.capacity)
           .field("content", &self.iter())
           .finish()
    }
}

impl<T:Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (idx, elem) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{elem}")?;
        }
        f.write_str("]")
    }
}
