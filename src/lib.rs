// Fold (reduce) from first principles
// Left and right folds over slices, with an explicit seed or seeded
// from the sequence itself, plus a fallible variant and a slice
// extension trait for method-style calls.

use std::fmt;

// =============================================================================
// Milestone 1: Error type
// =============================================================================

/// The single failure mode a fold owns: asking it to seed the accumulator
/// from a sequence that has no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FoldError {
    #[error("cannot seed the accumulator from an empty sequence")]
    EmptySequence,
}

// =============================================================================
// Milestone 2: Left-to-right folds
// =============================================================================

/// Folds `sequence` left to right, starting from `initial`.
///
/// The combining operation receives the running accumulator, the current
/// element, its index, and the whole sequence. Indices ascend strictly from
/// 0; every element is visited exactly once. An empty sequence returns
/// `initial` unchanged without ever invoking the operation.
pub fn fold<T, U, F>(sequence: &[T], mut operation: F, initial: U) -> U
where
    F: FnMut(U, &T, usize, &[T]) -> U,
{
    let mut accumulator = initial;
    for (index, element) in sequence.iter().enumerate() {
        accumulator = operation(accumulator, element, index, sequence);
    }
    accumulator
}

/// Folds `sequence` left to right, seeding the accumulator from the first
/// element. Traversal then starts at index 1.
///
/// Because the seed comes out of the sequence, the accumulator type is the
/// element type; a fold that accumulates into a different type must use
/// [`fold`] with an explicit seed. Fails on an empty sequence, before any
/// traversal happens.
pub fn fold_first<T, F>(sequence: &[T], mut operation: F) -> Result<T, FoldError>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    let (first, rest) = sequence.split_first().ok_or(FoldError::EmptySequence)?;
    let mut accumulator = first.clone();
    for (offset, element) in rest.iter().enumerate() {
        accumulator = operation(accumulator, element, offset + 1, sequence);
    }
    Ok(accumulator)
}

// =============================================================================
// Milestone 3: Right-to-left mirrors
// =============================================================================

/// Folds `sequence` right to left, starting from `initial`. Indices descend
/// strictly from `sequence.len() - 1` to 0; the operation still receives the
/// true index of the element being combined.
pub fn rfold<T, U, F>(sequence: &[T], mut operation: F, initial: U) -> U
where
    F: FnMut(U, &T, usize, &[T]) -> U,
{
    let mut accumulator = initial;
    for (index, element) in sequence.iter().enumerate().rev() {
        accumulator = operation(accumulator, element, index, sequence);
    }
    accumulator
}

/// Folds `sequence` right to left, seeding the accumulator from the last
/// element. Traversal then continues at index `len - 2`. Fails on an empty
/// sequence.
pub fn rfold_last<T, F>(sequence: &[T], mut operation: F) -> Result<T, FoldError>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    let (last, rest) = sequence.split_last().ok_or(FoldError::EmptySequence)?;
    let mut accumulator = last.clone();
    for (index, element) in rest.iter().enumerate().rev() {
        accumulator = operation(accumulator, element, index, sequence);
    }
    Ok(accumulator)
}

// =============================================================================
// Milestone 4: Fallible combining operations
// =============================================================================

/// Left-to-right fold whose combining operation can fail.
///
/// The first `Err` returned by the operation stops the traversal and is
/// handed back to the caller unmodified; no partial accumulator survives.
pub fn try_fold<T, U, E, F>(sequence: &[T], mut operation: F, initial: U) -> Result<U, E>
where
    F: FnMut(U, &T, usize, &[T]) -> Result<U, E>,
{
    let mut accumulator = initial;
    for (index, element) in sequence.iter().enumerate() {
        accumulator = operation(accumulator, element, index, sequence)?;
    }
    Ok(accumulator)
}

// =============================================================================
// Milestone 5: Method-style access via an extension trait
// =============================================================================

/// Slice extension offering the folds as methods. Imported explicitly by the
/// caller, so nothing built-in gets patched.
pub trait Reduce {
    type Item;

    fn reduce_with<U, F>(&self, operation: F, initial: U) -> U
    where
        F: FnMut(U, &Self::Item, usize, &[Self::Item]) -> U;

    fn reduce_first<F>(&self, operation: F) -> Result<Self::Item, FoldError>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, &Self::Item, usize, &[Self::Item]) -> Self::Item;

    fn reduce_right<U, F>(&self, operation: F, initial: U) -> U
    where
        F: FnMut(U, &Self::Item, usize, &[Self::Item]) -> U;

    fn try_reduce<U, E, F>(&self, operation: F, initial: U) -> Result<U, E>
    where
        F: FnMut(U, &Self::Item, usize, &[Self::Item]) -> Result<U, E>;
}

impl<T> Reduce for [T] {
    type Item = T;

    fn reduce_with<U, F>(&self, operation: F, initial: U) -> U
    where
        F: FnMut(U, &T, usize, &[T]) -> U,
    {
        fold(self, operation, initial)
    }

    fn reduce_first<F>(&self, operation: F) -> Result<T, FoldError>
    where
        T: Clone,
        F: FnMut(T, &T, usize, &[T]) -> T,
    {
        fold_first(self, operation)
    }

    fn reduce_right<U, F>(&self, operation: F, initial: U) -> U
    where
        F: FnMut(U, &T, usize, &[T]) -> U,
    {
        rfold(self, operation, initial)
    }

    fn try_reduce<U, E, F>(&self, operation: F, initial: U) -> Result<U, E>
    where
        F: FnMut(U, &T, usize, &[T]) -> Result<U, E>,
    {
        try_fold(self, operation, initial)
    }
}

// =============================================================================
// Walkthrough helpers
// =============================================================================

/// Renders one step of a fold as `acc ∘ element -> next`, for the
/// walkthrough binary's trace output.
pub fn trace_step<U: fmt::Display, T: fmt::Display>(
    accumulator: &U,
    element: &T,
    index: usize,
    next: &U,
) -> String {
    format!("step {index}: {accumulator} ∘ {element} = {next}")
}

// =============================================================================
// Tests
// =============================================================================
