//! Helpers over any finite ordered sequence.
//!
//! Every helper accepts an `IntoIterator` and returns a fresh `Vec` (or an
//! `Option` for lookups), leaving its input untouched. Callbacks that take an
//! index receive the element's position in the input. [`List`](crate::List)
//! is built on these.
//!
//! Positional helpers are forgiving: an out-of-bounds index skips the
//! operation and returns the sequence unchanged rather than failing.

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;

/// Resolves a possibly-negative index against `len`; negative counts from the end.
fn resolve_index(len: usize, index: isize) -> Option<usize> {
    if index < 0 {
        len.checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    }
}

pub fn to_array<I: IntoIterator>(iter: I) -> Vec<I::Item> {
    iter.into_iter().collect()
}

/// Calls `f` on every element in order.
pub fn each<I, F>(iter: I, mut f: F)
where
    I: IntoIterator,
    F: FnMut(I::Item, usize),
{
    for (index, item) in iter.into_iter().enumerate() {
        f(item, index);
    }
}

pub fn map<I, U, F>(iter: I, mut f: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> U,
{
    iter.into_iter()
        .enumerate()
        .map(|(index, item)| f(item, index))
        .collect()
}

pub fn filter<I, F>(iter: I, mut predicate: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    iter.into_iter()
        .enumerate()
        .filter(|(index, item)| predicate(item, *index))
        .map(|(_, item)| item)
        .collect()
}

/// Returns the first element matching `predicate`.
pub fn find<I, F>(iter: I, mut predicate: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    iter.into_iter()
        .enumerate()
        .find(|(index, item)| predicate(item, *index))
        .map(|(_, item)| item)
}

/// Returns the last element matching `predicate`.
pub fn find_last<I, F>(iter: I, mut predicate: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    iter.into_iter()
        .enumerate()
        .filter(|(index, item)| predicate(item, *index))
        .last()
        .map(|(_, item)| item)
}

pub fn find_index<I, F>(iter: I, mut predicate: F) -> Option<usize>
where
    I: IntoIterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    iter.into_iter()
        .enumerate()
        .find(|(index, item)| predicate(item, *index))
        .map(|(index, _)| index)
}

/// Returns the position, counted from the front, of the last match.
pub fn find_last_index<I, F>(iter: I, mut predicate: F) -> Option<usize>
where
    I: IntoIterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    iter.into_iter()
        .enumerate()
        .filter(|(index, item)| predicate(item, *index))
        .last()
        .map(|(index, _)| index)
}

/// Flattens one level of nesting.
pub fn flat<I>(iter: I) -> Vec<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    iter.into_iter().flatten().collect()
}

/// Maps every element to a sequence and flattens the results one level.
pub fn flat_map<I, U, F>(iter: I, mut f: F) -> Vec<U::Item>
where
    I: IntoIterator,
    U: IntoIterator,
    F: FnMut(I::Item, usize) -> U,
{
    iter.into_iter()
        .enumerate()
        .flat_map(|(index, item)| f(item, index))
        .collect()
}

pub fn concat<I, J>(iter: I, other: J) -> Vec<I::Item>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    iter.into_iter().chain(other).collect()
}

/// Returns the element at `index`; negative indexes count from the end.
pub fn at<I: IntoIterator>(iter: I, index: isize) -> Option<I::Item> {
    let mut items = to_array(iter);
    let index = resolve_index(items.len(), index)?;
    if index < items.len() {
        Some(items.swap_remove(index))
    } else {
        None
    }
}

pub fn reduce<I, U, F>(iter: I, initial: U, mut f: F) -> U
where
    I: IntoIterator,
    F: FnMut(U, I::Item, usize) -> U,
{
    iter.into_iter()
        .enumerate()
        .fold(initial, |acc, (index, item)| f(acc, item, index))
}

/// Folds from the last element to the first.
pub fn reduce_right<I, U, F>(iter: I, initial: U, mut f: F) -> U
where
    I: IntoIterator,
    F: FnMut(U, I::Item, usize) -> U,
{
    to_array(iter)
        .into_iter()
        .enumerate()
        .rev()
        .fold(initial, |acc, (index, item)| f(acc, item, index))
}

pub fn first<I: IntoIterator>(iter: I) -> Option<I::Item> {
    iter.into_iter().next()
}

pub fn last<I: IntoIterator>(iter: I) -> Option<I::Item> {
    iter.into_iter().last()
}

/// Drops absent elements.
pub fn compact<I, T>(iter: I) -> Vec<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    iter.into_iter().flatten().collect()
}

/// Removes duplicates, keeping the first occurrence of each element.
pub fn unique<I>(iter: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut seen: Vec<I::Item> = Vec::new();
    for item in iter {
        if !seen.contains(&item) {
            seen.push(item);
        }
    }
    seen
}

/// Returns the elements in random order (Fisher-Yates) using the thread-local generator.
pub fn shuffle<I: IntoIterator>(iter: I) -> Vec<I::Item> {
    shuffle_with(iter, &mut rand::rng())
}

/// Like [`shuffle`], drawing from `rng`.
pub fn shuffle_with<I, R>(iter: I, rng: &mut R) -> Vec<I::Item>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut items = to_array(iter);
    items.shuffle(rng);
    items
}

pub fn append<I, J>(iter: I, items: J) -> Vec<I::Item>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    concat(iter, items)
}

pub fn prepend<I, J>(iter: I, items: J) -> Vec<I::Item>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    concat(items, iter)
}

pub fn take<I: IntoIterator>(iter: I, count: usize) -> Vec<I::Item> {
    iter.into_iter().take(count).collect()
}

pub fn drop<I: IntoIterator>(iter: I, count: usize) -> Vec<I::Item> {
    iter.into_iter().skip(count).collect()
}

/// Inserts `element` before position `index`; negative indexes count from the end.
///
/// The index must name an existing element, so inserting at the length skips.
pub fn insert<I: IntoIterator>(iter: I, element: I::Item, index: isize) -> Vec<I::Item> {
    let mut items = to_array(iter);
    match resolve_index(items.len(), index) {
        Some(index) if index < items.len() => items.insert(index, element),
        _ => {}
    }
    items
}

pub fn remove<I: IntoIterator>(iter: I, index: usize) -> Vec<I::Item> {
    let mut items = to_array(iter);
    if index < items.len() {
        items.remove(index);
    }
    items
}

pub fn swap<I: IntoIterator>(iter: I, a: usize, b: usize) -> Vec<I::Item> {
    let mut items = to_array(iter);
    if a < items.len() && b < items.len() {
        items.swap(a, b);
    }
    items
}

/// Moves the element at `from` so that it ends up at position `to`.
pub fn move_item<I: IntoIterator>(iter: I, from: usize, to: usize) -> Vec<I::Item> {
    let mut items = to_array(iter);
    if from < items.len() && to < items.len() {
        let item = items.remove(from);
        items.insert(to, item);
    }
    items
}

/// Returns a sorted copy. The sort is stable.
pub fn sort<I>(iter: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut items = to_array(iter);
    items.sort();
    items
}

/// Returns a copy sorted with `compare`. The sort is stable.
pub fn sort_by<I, F>(iter: I, compare: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    let mut items = to_array(iter);
    items.sort_by(compare);
    items
}

pub fn reverse<I: IntoIterator>(iter: I) -> Vec<I::Item> {
    let mut items = to_array(iter);
    items.reverse();
    items
}

/// Returns true if `search` occurs at or after `from_index`.
///
/// A negative `from_index` counts from the end; one reaching past the start
/// searches the whole sequence.
pub fn includes<I>(iter: I, search: &I::Item, from_index: isize) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let items = to_array(iter);
    let start = resolve_index(items.len(), from_index).unwrap_or(0);
    items.iter().skip(start).any(|item| item == search)
}
