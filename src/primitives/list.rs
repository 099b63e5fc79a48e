//! An owned, ordered container with a fluent API.
//!
//! [`List`] splits its API in two:
//!
//! - methods taking `&self` are pure and return a new `List` (or a lookup),
//!   leaving the receiver untouched;
//! - methods taking `&mut self` mutate the backing store in place and return
//!   `&mut Self` for chaining, or the removed element for `pop`/`shift`.
//!
//! # Example
//!
//! ```rust
//! use litmus::List;
//!
//! let mut list = List::of(vec![3, 1, 2]);
//! let sorted = list.sort();
//! list.append([4]).swap(0, 1);
//!
//! assert_eq!(sorted.to_array(), vec![1, 2, 3]);
//! assert_eq!(list.to_array(), vec![1, 3, 2, 4]);
//! assert_eq!(list.pop(), Some(4));
//! ```

use std::cmp::Ordering;
use std::ops::Index;

use crate::iterable as it;
use crate::value::Value;

/// An ordered, mutable, 0-indexed sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct List<T> {
    items: Vec<T>,
}

impl<T> List<T> {
    /// Creates an empty list.
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a list from any sequence.
    pub fn of<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: it::to_array(iter),
        }
    }

    /// Creates a list from a sequence of optional elements, dropping the absent ones.
    pub fn compact<I: IntoIterator<Item = Option<T>>>(iter: I) -> Self {
        Self {
            items: it::compact(iter),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Calls `f` on every element in order.
    pub fn each<F: FnMut(&T, usize)>(&self, f: F) -> &Self {
        it::each(&self.items, f);
        self
    }

    pub fn map<U, F: FnMut(&T, usize) -> U>(&self, f: F) -> List<U> {
        List::of(it::map(&self.items, f))
    }

    /// Maps every element to a sequence and flattens the results one level.
    pub fn flat_map<U, F>(&self, f: F) -> List<U::Item>
    where
        U: IntoIterator,
        F: FnMut(&T, usize) -> U,
    {
        List::of(it::flat_map(&self.items, f))
    }

    pub fn find<F: FnMut(&T, usize) -> bool>(&self, mut predicate: F) -> Option<&T> {
        it::find(&self.items, |item, index| predicate(item, index))
    }

    pub fn find_last<F: FnMut(&T, usize) -> bool>(&self, mut predicate: F) -> Option<&T> {
        it::find_last(&self.items, |item, index| predicate(item, index))
    }

    pub fn find_index<F: FnMut(&T, usize) -> bool>(&self, mut predicate: F) -> Option<usize> {
        it::find_index(&self.items, |item, index| predicate(item, index))
    }

    pub fn find_last_index<F: FnMut(&T, usize) -> bool>(&self, mut predicate: F) -> Option<usize> {
        it::find_last_index(&self.items, |item, index| predicate(item, index))
    }

    /// Returns the element at `index`; negative indexes count from the end.
    pub fn at(&self, index: isize) -> Option<&T> {
        it::at(&self.items, index)
    }

    pub fn first(&self) -> Option<&T> {
        it::first(&self.items)
    }

    pub fn last(&self) -> Option<&T> {
        it::last(&self.items)
    }

    pub fn reduce<U, F: FnMut(U, &T, usize) -> U>(&self, initial: U, f: F) -> U {
        it::reduce(&self.items, initial, f)
    }

    /// Folds from the last element to the first.
    pub fn reduce_right<U, F: FnMut(U, &T, usize) -> U>(&self, initial: U, f: F) -> U {
        it::reduce_right(&self.items, initial, f)
    }

    /// Appends `items` to the end.
    pub fn append<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        self.items.extend(items);
        self
    }

    /// Inserts `items`, in order, before the first element.
    pub fn prepend<I: IntoIterator<Item = T>>(&mut self, items: I) -> &mut Self {
        self.items = it::prepend(std::mem::take(&mut self.items), items);
        self
    }

    /// Inserts `element` before position `index`; negative indexes count
    /// from the end. An out-of-bounds index leaves the list unchanged.
    pub fn insert(&mut self, element: T, index: isize) -> &mut Self {
        self.items = it::insert(std::mem::take(&mut self.items), element, index);
        self
    }

    /// Removes the element at `index`. An out-of-bounds index leaves the list unchanged.
    pub fn remove(&mut self, index: usize) -> &mut Self {
        self.items = it::remove(std::mem::take(&mut self.items), index);
        self
    }

    /// Swaps two elements. An out-of-bounds index leaves the list unchanged.
    pub fn swap(&mut self, a: usize, b: usize) -> &mut Self {
        self.items = it::swap(std::mem::take(&mut self.items), a, b);
        self
    }

    /// Moves the element at `from` to position `to`. An out-of-bounds index
    /// leaves the list unchanged.
    pub fn move_item(&mut self, from: usize, to: usize) -> &mut Self {
        self.items = it::move_item(std::mem::take(&mut self.items), from, to);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Removes and returns the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes and returns the first element.
    pub fn shift(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }
}

impl<T: Clone> List<T> {
    pub fn filter<F: FnMut(&T, usize) -> bool>(&self, predicate: F) -> List<T> {
        List::of(it::filter(self.items.iter().cloned(), predicate))
    }

    /// Concatenates this list with `others`, in order.
    pub fn concat<'a, I>(&self, others: I) -> List<T>
    where
        I: IntoIterator<Item = &'a List<T>>,
        T: 'a,
    {
        let rest = others.into_iter().flat_map(|list| list.items.iter().cloned());
        List::of(it::concat(self.items.iter().cloned(), rest))
    }

    pub fn take(&self, count: usize) -> List<T> {
        List::of(it::take(self.items.iter().cloned(), count))
    }

    pub fn drop(&self, count: usize) -> List<T> {
        List::of(it::drop(self.items.iter().cloned(), count))
    }

    /// Returns the elements in random order.
    pub fn shuffle(&self) -> List<T> {
        List::of(it::shuffle(self.items.iter().cloned()))
    }

    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&self, compare: F) -> List<T> {
        List::of(it::sort_by(self.items.iter().cloned(), compare))
    }

    pub fn reverse(&self) -> List<T> {
        List::of(it::reverse(self.items.iter().cloned()))
    }

    /// Calls `f` with a snapshot of the list and returns the list unchanged.
    pub fn inspect<F: FnOnce(List<T>)>(&self, f: F) -> &Self {
        f(self.clone());
        self
    }

    /// Returns a copy of the elements.
    pub fn to_array(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: Clone + Ord> List<T> {
    pub fn sort(&self) -> List<T> {
        List::of(it::sort(self.items.iter().cloned()))
    }
}

impl<T: Clone + PartialEq> List<T> {
    /// Removes duplicates, keeping first occurrences.
    pub fn unique(&self) -> List<T> {
        List::of(it::unique(self.items.iter().cloned()))
    }
}

impl<T: PartialEq> List<T> {
    pub fn includes(&self, search: &T) -> bool {
        self.items.contains(search)
    }

    /// Like [`List::includes`], starting at `from_index` (negative counts from the end).
    pub fn includes_from(&self, search: &T, from_index: isize) -> bool {
        it::includes(&self.items, &search, from_index)
    }
}

impl<T: Clone + IntoIterator> List<T> {
    /// Flattens one level of nesting.
    pub fn flat(&self) -> List<T::Item> {
        List::of(it::flat(self.items.iter().cloned()))
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: Into<Value>> From<List<T>> for Value {
    fn from(list: List<T>) -> Self {
        Value::Array(list.items.into_iter().map(Into::into).collect())
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}
