//! # Enumerator Adapter Layer
//!
//! `gisenum-core` turns the legacy COM-style enumeration shapes modeled in
//! [`gisenum_common`] into lazy, forward-only [`Iterator`]s.
//!
//! ## Architecture Overview
//! * **[`pass`]**: the two traversal loops (reset-then-advance and
//!   count-plus-position) shared by every adapter.
//! * **[`carto`]**, **[`geodatabase`]**, **[`system`]**: one adapter per
//!   foreign shape, each contributing only its foreign calls and its
//!   exhaustion sentinel. The grouping mirrors the platform's libraries.
//!
//! ## Contract
//! Uniform across all adapters:
//! * An absent source (`None`) is an empty sequence, never an error.
//! * Nothing foreign is called until the consumer pulls the first item; the
//!   rewind (or count read) happens on that first pull.
//! * Elements pass through untouched; the subtype adapter's name→code
//!   repackaging is the single exception.
//! * After the shape's sentinel is observed the iterator is fused and makes
//!   no further foreign calls.
//!
//! ## Caller obligations
//! The foreign cursor is shared mutable state inside the platform object:
//! running two passes over one source at the same time is undefined, and a
//! source mutated between passes yields whatever the platform decides.
//! Cursor disposal always stays with the caller. A platform fault inside a
//! reset, advance, or positional read unwinds through the adapter unchanged.

pub mod carto;
pub mod geodatabase;
pub mod pass;
pub mod system;
