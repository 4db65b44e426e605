#![cfg_attr(not(feature = "std"), no_std)]

//! static-ranges - generic algorithms over fixed-arity containers
//!
//! # Overview
//!
//! A *static range* is a container whose length is part of its type and whose
//! elements are reached by compile-time index: tuples, fixed arrays, views over
//! them, and your own structs. Algorithms over static ranges are written once
//! and expand, per call site, into straight-line code with one step per
//! element. Common uses include:
//!
//! - Copying or converting between records of different shapes
//! - Applying one function to every field of a heterogeneous tuple
//! - Lazy per-field projections that never allocate
//!
//! # Quick Start
//!
//! ```
//! use static_ranges::algo::{copy, transform2};
//! use static_ranges::views::{all, transform};
//! use static_ranges::element;
//!
//! let mut record = (1, 2.5, "text");
//!
//! // Lazy: nothing is computed until an element is read.
//! let scaled = all(&record) | transform(|x: &i32| x * 100);
//! assert_eq!(element::<0, _>(&scaled), 100);
//!
//! // Bulk: one unrolled step per element.
//! copy(&(42, 0.5, "copied"), &mut record);
//! assert_eq!(record, (42, 0.5, "copied"));
//!
//! let mut sums = [0_i32; 3];
//! transform2(&[1, 2, 3], &[10, 20, 30], &mut sums, |a: &i32, b: &i32| a + b);
//! assert_eq!(sums, [11, 22, 33]);
//! ```
//!
//! # Conversions
//!
//! With the default `convert` feature, [`convert`] turns any static range into
//! a pair, a tuple or an array:
//!
//! ```
//! # #[cfg(feature = "convert")] {
//! use static_ranges::convert::{to_array, to_pair};
//!
//! assert_eq!(to_pair(&("a", 1)), (&"a", &1));
//! assert_eq!(to_array::<u64, _>((1_u8, 2_u16, 3_u32)), [1, 2, 3]);
//! # }
//! ```
//!
//! # Your own types
//!
//! [`static_range!`] implements the protocol for a struct with named fields.

// Re-export the protocol, views and algorithms from static_ranges_core
pub use static_ranges_core::{
    Element, ElementMut, Range, StaticRange, algo, element, func, index_list, protocol, size_of,
    static_range, views,
};

// Conversions live in their own crate
#[cfg(feature = "convert")]
pub use static_ranges_convert as convert;
