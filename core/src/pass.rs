//! # Forward-Pass Machinery
//!
//! One traversal loop for every reset-then-advance shape and one for every
//! counted shape. Each adapter module contributes only a [`PullProtocol`] or
//! [`IndexedProtocol`] implementation naming its foreign calls and its
//! exhaustion sentinel; the loops here never change between shapes.
//!
//! Both passes are lazy: constructing one performs no foreign call. The
//! reset (or count read) happens on the first pull, and once the sentinel
//! (or the count) is reached the source is dropped, so an exhausted pass is
//! fused and touches the foreign object no further.

use std::borrow::{Borrow, BorrowMut};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use tracing::trace;

/// One reset-then-advance traversal protocol.
///
/// Implementations name the foreign calls and the terminator test for a
/// single enumerator shape; [`Pass`] supplies the loop itself.
pub trait PullProtocol {
    /// Foreign source the calls are made against.
    type Source: ?Sized;
    /// Raw value returned by one advance call, sentinel included.
    type Raw;
    /// Item the pass yields.
    type Item;

    /// Rewinds the foreign cursor. Cursor shapes cannot rewind and keep the
    /// default no-op.
    fn reset(_source: &mut Self::Source) {}

    /// Advances the foreign cursor by one position.
    fn advance(source: &mut Self::Source) -> Self::Raw;

    /// Terminator test and item conversion in one step: `None` means `raw`
    /// was the shape's sentinel and the pass is over.
    fn accept(raw: Self::Raw) -> Option<Self::Item>;
}

/// Lazy single pass over a reset-then-advance enumerator.
///
/// `S` is the source storage: a mutable borrow for the usual adapters, or
/// the owned enumerator a map hands out for its layer stack. An absent
/// source behaves as an empty pass.
pub struct Pass<S, P> {
    source: Option<S>,
    started: bool,
    shape: PhantomData<P>,
}

impl<S, P> Pass<S, P> {
    /// Starts a pass over `source`. `None` produces an empty pass without
    /// touching anything foreign.
    pub fn over(source: Option<S>) -> Self {
        Self {
            source,
            started: false,
            shape: PhantomData,
        }
    }
}

impl<S, P> Iterator for Pass<S, P>
where
    P: PullProtocol,
    S: BorrowMut<P::Source>,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        let source = self.source.as_mut()?.borrow_mut();
        if !self.started {
            self.started = true;
            trace!("starting forward pass");
            P::reset(source);
        }
        match P::accept(P::advance(source)) {
            Some(item) => Some(item),
            None => {
                // Sentinel seen; dropping the source fuses the pass.
                self.source = None;
                None
            }
        }
    }
}

impl<S, P> FusedIterator for Pass<S, P>
where
    P: PullProtocol,
    S: BorrowMut<P::Source>,
{
}

/// Positional access protocol over a counted collection.
pub trait IndexedProtocol {
    /// Foreign source the reads are made against.
    type Source: ?Sized;
    /// Item the pass yields.
    type Item;

    /// Reads the foreign element count.
    fn count(source: &Self::Source) -> usize;

    /// Reads the element at `index`. Positional reads do not move any
    /// foreign cursor.
    fn at(source: &Self::Source, index: usize) -> Self::Item;
}

/// Lazy positional pass over a counted collection.
///
/// The foreign count is read once, on the first pull, and cached for the
/// rest of the pass. An absent source behaves as an empty pass.
pub struct IndexedPass<S, P> {
    source: Option<S>,
    index: usize,
    count: Option<usize>,
    shape: PhantomData<P>,
}

impl<S, P> IndexedPass<S, P> {
    /// Starts a pass over `source`. `None` produces an empty pass without
    /// touching anything foreign.
    pub fn over(source: Option<S>) -> Self {
        Self {
            source,
            index: 0,
            count: None,
            shape: PhantomData,
        }
    }
}

impl<S, P> Iterator for IndexedPass<S, P>
where
    P: IndexedProtocol,
    S: Borrow<P::Source>,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        let source = self.source.as_ref()?.borrow();
        let count = match self.count {
            Some(count) => count,
            None => {
                let count = P::count(source);
                trace!(count, "read foreign element count");
                self.count = Some(count);
                count
            }
        };
        if self.index >= count {
            self.source = None;
            return None;
        }
        let item = P::at(source, self.index);
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (&self.source, self.count) {
            (None, _) => (0, Some(0)),
            (Some(_), Some(count)) => {
                let left = count - self.index;
                (left, Some(left))
            }
            // Count not read yet; nothing foreign gets touched for a hint.
            (Some(_), None) => (0, None),
        }
    }
}

impl<S, P> FusedIterator for IndexedPass<S, P>
where
    P: IndexedProtocol,
    S: Borrow<P::Source>,
{
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
