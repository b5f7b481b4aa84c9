//! # System Adapters
//!
//! Adapters over the base system library shapes: the string enumerator and
//! the two array collections.

use std::marker::PhantomData;

use gisenum_common::system::{LongArray, ObjectArray, StringEnumerator};

use crate::pass::{IndexedPass, IndexedProtocol, Pass, PullProtocol};

/// Reset-then-advance protocol of a [`StringEnumerator`]. Only a missing
/// string terminates the pass; empty strings are yielded.
pub struct ByString<E: ?Sized>(PhantomData<E>);

impl<E> PullProtocol for ByString<E>
where
    E: StringEnumerator + ?Sized,
{
    type Source = E;
    type Raw = Option<String>;
    type Item = String;

    fn reset(source: &mut E) {
        source.reset();
    }

    fn advance(source: &mut E) -> Option<String> {
        source.next_string()
    }

    fn accept(raw: Option<String>) -> Option<String> {
        raw
    }
}

/// Positional protocol of a [`LongArray`].
pub struct ByLong<A: ?Sized>(PhantomData<A>);

impl<A> IndexedProtocol for ByLong<A>
where
    A: LongArray + ?Sized,
{
    type Source = A;
    type Item = i32;

    fn count(source: &A) -> usize {
        source.count()
    }

    fn at(source: &A, index: usize) -> i32 {
        source.element(index)
    }
}

/// Positional protocol of an [`ObjectArray`].
pub struct ByElement<A: ?Sized>(PhantomData<A>);

impl<A> IndexedProtocol for ByElement<A>
where
    A: ObjectArray + ?Sized,
{
    type Source = A;
    type Item = A::Element;

    fn count(source: &A) -> usize {
        source.count()
    }

    fn at(source: &A, index: usize) -> A::Element {
        source.element(index)
    }
}

/// Lazy iterator over the strings of a [`StringEnumerator`].
pub type Strings<'a, E> = Pass<&'a mut E, ByString<E>>;

/// Lazy iterator over the values of a [`LongArray`].
pub type Longs<'a, A> = IndexedPass<&'a A, ByLong<A>>;

/// Lazy iterator over the elements of an [`ObjectArray`].
pub type Elements<'a, A> = IndexedPass<&'a A, ByElement<A>>;

/// Starts a lazy pass over `source`'s strings. An absent source yields an
/// empty pass.
pub fn strings<E>(source: Option<&mut E>) -> Strings<'_, E>
where
    E: StringEnumerator + ?Sized,
{
    Pass::over(source)
}

/// Starts a lazy positional pass over `source`'s values. An absent source
/// yields an empty pass.
pub fn longs<A>(source: Option<&A>) -> Longs<'_, A>
where
    A: LongArray + ?Sized,
{
    IndexedPass::over(source)
}

/// Starts a lazy positional pass over `source`'s elements. An absent source
/// yields an empty pass.
pub fn elements<A>(source: Option<&A>) -> Elements<'_, A>
where
    A: ObjectArray + ?Sized,
{
    IndexedPass::over(source)
}

/// Method-call surface over [`strings`].
pub trait StringEnumeratorExt: StringEnumerator {
    /// Adapts this enumerator into a lazy [`Iterator`] over its strings.
    fn iter_strings(&mut self) -> Strings<'_, Self> {
        strings(Some(self))
    }
}

impl<E> StringEnumeratorExt for E where E: StringEnumerator + ?Sized {}

/// Method-call surface over [`longs`].
pub trait LongArrayExt: LongArray {
    /// Adapts this array into a lazy [`Iterator`] over its values.
    fn iter_longs(&self) -> Longs<'_, Self> {
        longs(Some(self))
    }
}

impl<A> LongArrayExt for A where A: LongArray + ?Sized {}

/// Method-call surface over [`elements`].
pub trait ObjectArrayExt: ObjectArray {
    /// Adapts this array into a lazy [`Iterator`] over its elements.
    fn iter_elements(&self) -> Elements<'_, Self> {
        elements(Some(self))
    }
}

impl<A> ObjectArrayExt for A where A: ObjectArray + ?Sized {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
