//! # uniset
//!
//! An insertion-ordered unique-element collection for small in-memory sets.
//!
//! ## Overview
//!
//! [`Set`](collection::Set) keeps its elements in the order they were added
//! and never holds two strictly equal elements. It offers:
//!
//! - **Uniqueness by strict equality**: same type and same value, no coercion
//! - **All-or-nothing bulk operations**: a rejected `add_all` or `remove_all`
//!   leaves the set exactly as it was
//! - **Structural equality**: sets compare by the sum of their elements'
//!   checksums, recursing into nested sets
//! - **Heterogeneous elements**: [`Value`](collection::Value) mixes numbers,
//!   text, booleans, nulls and nested sets in one collection
//!
//! ## Feature Flags
//!
//! - `collection`: the [`collection`] module
//! - `tracing`: emit `tracing` events when bulk operations commit or roll back
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use uniset::prelude::*;
//!
//! let mut set = Set::new();
//! assert!(set.add_all([1, 3, 5]));
//! assert!(!set.add_all([2, 3]));
//! assert_eq!(set.to_vec(), vec![1, 3, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use uniset::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;
}

#[cfg(feature = "collection")]
pub mod collection;
