//! # Platform Contracts
//!
//! Trait models of the legacy COM-style enumeration interfaces exposed by the
//! GIS platform. The platform objects themselves live outside this workspace;
//! consumers implement these traits over their real bindings, and
//! `gisenum-core` adapts any implementation into a lazy [`Iterator`].
//!
//! ## Characteristics
//! * **Pure Rust**: no external dependencies, no IO, no system calls.
//! * **Shape-faithful**: each trait mirrors one foreign interface shape,
//!   reset-then-advance or count-plus-position, sentinel conventions
//!   included.
//! * **Element-agnostic**: element types (layers, rows, features, ...) are
//!   associated types and pass through the adapters untouched.
//!
//! ## Contents
//! * **[`carto`]**: map documents and layer enumeration.
//! * **[`geodatabase`]**: cursors, field sets, class containers, object-ID
//!   sets, subtype and dataset enumeration.
//! * **[`system`]**: string enumerators and the platform's array
//!   collections.

pub mod carto;
pub mod geodatabase;
pub mod system;
