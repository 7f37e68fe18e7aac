use std::{
    fmt::{
        self,
        Debug,
        Formatter,
    },
    iter::FusedIterator,
    vec,
};

/// Borrowing, forward-only iterator over the live elements of a
/// [`DynamicArray`](crate::DynamicArray).
///
/// Bound to the slots and length the array had when the iterator was created. The array stays
/// borrowed for the iterator's lifetime, so it cannot change underneath it.
pub struct Iter<'a, T>{
    slots: &'a [Option<T>],
    pos: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Self{
            slots,
            pos: 0,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots.get(self.pos)?;
        self.pos += 1;
        slot.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slots.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self{
            slots: self.slots,
            pos: self.pos,
        }
    }
}

impl<T:Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// Owning iterator returned by `DynamicArray::into_iter`.
pub struct IntoIter<T>{
    slots: vec::IntoIter<Option<T>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(storage: Box<[Option<T>]>, len: usize) -> Self {
        Self{
            slots: storage.into_vec().into_iter(),
            remaining: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.slots.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("IntoIter")
           .field("remaining", &self.remaining)
           .finish()
    }
}
