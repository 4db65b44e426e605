#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Compile-time ranges over fixed-arity heterogeneous containers.
//!
//! A *static range* is any type whose arity is a compile-time constant and
//! whose elements can be reached by a compile-time index: tuples, fixed
//! arrays, the views in [`views`], and any user aggregate that implements the
//! protocol (see [`static_range!`]). Every operation in this crate is resolved
//! during monomorphization into a flat sequence of per-index steps; there is no
//! runtime dispatch, no allocation and no loop over indices.
//!
//! # Example
//!
//! ```
//! use static_ranges_core::{element, size_of, views::{all, transform}};
//!
//! let mut record = (40, 2.5_f64, "text");
//! assert_eq!(size_of(&record), 3);
//!
//! // Writes through a view land in the original tuple.
//! *element::<0, _>(&mut all(&mut record)) += 2;
//! assert_eq!(record.0, 42);
//!
//! // Transforms are lazy: nothing runs until an element is read.
//! let view = &mut record | transform(|x: &i32| *x * 10);
//! assert_eq!(element::<0, _>(&view), 420);
//! ```
//!
//! # Layout
//!
//! - [`protocol`]: the descriptor traits ([`StaticRange`], [`Element`]), the
//!   capability predicates and the element access facade.
//! - [`views`]: reference, materialized and transform views, and the lazy
//!   composition engine behind `range | transform(f)`.
//! - [`algo`]: bulk per-element operators (`for_each`, `copy`, `transform`).
//! - [`func`]: the function protocols used by views and operators.

pub mod algo;
pub mod func;
mod macros;
pub mod protocol;
pub mod views;

pub use protocol::{Element, ElementMut, Range, StaticRange, element, size_of};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with TRACE level.
    /// Call this at the start of tests where you want to see the per-operation
    /// trace events.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
