//! Immutable list editors shared by the root cause, solution and action steps.
//!
//! Every operation borrows the current sequence and returns a new one; the
//! input is never touched. Positional editors address rows by index, keyed
//! editors by a stable identity (see [`Keyed`]). Out-of-range indices and
//! unknown keys are no-ops that return an equal sequence.

/// A row that carries its own stable identity.
pub trait Keyed {
    type Key: PartialEq;

    fn key(&self) -> &Self::Key;
}

/// Returns a new sequence with `make_default()` appended at the end.
pub fn append<T: Clone>(items: &[T], make_default: impl FnOnce() -> T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(make_default());
    next
}

/// Returns a new sequence without the element at `index`; later rows shift left.
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Returns a new sequence where only the element at `index` is replaced by
/// `update(&old)`.
pub fn update_at<T: Clone>(items: &[T], index: usize, update: impl FnOnce(&T) -> T) -> Vec<T> {
    let mut next = items.to_vec();
    if let Some(slot) = next.get_mut(index) {
        *slot = update(slot);
    }
    next
}

/// Returns a new sequence without the element whose key equals `key`.
pub fn remove_by_key<T: Clone + Keyed>(items: &[T], key: &T::Key) -> Vec<T> {
    items.iter().filter(|item| item.key() != key).cloned().collect()
}

/// Returns a new sequence where the element whose key equals `key` is
/// replaced by `update(&old)`.
pub fn update_by_key<T: Clone + Keyed>(
    items: &[T],
    key: &T::Key,
    update: impl FnOnce(&T) -> T,
) -> Vec<T> {
    let mut update = Some(update);
    items
        .iter()
        .map(|item| {
            if item.key() == key {
                if let Some(f) = update.take() {
                    return f(item);
                }
            }
            item.clone()
        })
        .collect()
}
