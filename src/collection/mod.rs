//! Insertion-ordered unique-element collections.
//!
//! This module provides:
//!
//! - [`Set`]: an ordered, duplicate-free collection with all-or-nothing bulk
//!   operations and hash-based structural equality
//! - [`Element`]: the capability trait deciding membership and hashing
//! - [`Value`]: a dynamically typed element for heterogeneous sets
//! - [`Cursor`], [`Iter`], [`IntoIter`]: traversal in insertion order
//! - [`BatchError`]: the reason a bulk operation was rolled back
//!
//! # Examples
//!
//! ```rust
//! use uniset::collection::{Set, Value};
//!
//! let mut set: Set<Value> = Set::new();
//! set.add(Value::from("Hello"));
//! set.add(Value::from("World"));
//! set.add(Value::from(Set::new()));
//! set.add(Value::from(Set::new()));
//! set.add(Value::from(47.11));
//! assert_eq!(set.len(), 5);
//!
//! // All-or-nothing: "World" is already present, so nothing is added
//! assert!(!set.add_all([Value::from(1), Value::from("World")]));
//! assert_eq!(set.len(), 5);
//! ```

#[cfg(feature = "tracing")]
macro_rules! log_event {
    ($level:ident, $($argument:tt)+) => {
        tracing::$level!($($argument)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_event {
    ($level:ident, $($argument:tt)+) => {
        ()
    };
}

mod checksum;
mod cursor;
mod element;
mod error;
mod identity;
mod unique_set;
mod value;

pub use checksum::checksum_bool;
pub use checksum::checksum_bytes;
pub use checksum::checksum_display;
pub use checksum::checksum_f32;
pub use checksum::checksum_f64;
pub use checksum::checksum_str;
pub use cursor::Cursor;
pub use cursor::IntoIter;
pub use cursor::Iter;
pub use element::Element;
pub use error::BatchError;
pub use identity::SetId;
pub use unique_set::EqualityPolicy;
pub use unique_set::Set;
pub use value::Value;
