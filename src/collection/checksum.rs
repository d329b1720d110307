//! CRC-32 checksums over the canonical textual form of atomic values.
//!
//! The canonical text of a value is what it contributes to a set's
//! structural hash:
//!
//! | Value              | Canonical text                     |
//! |--------------------|------------------------------------|
//! | integer            | decimal, e.g. `-17`                |
//! | float              | shortest round-trip, `1.0` → `1`   |
//! | float zeros        | `0` for both `0.0` and `-0.0`      |
//! | float specials     | `NAN`, `INF`, `-INF`               |
//! | `true` / `false`   | `1` / empty                        |
//! | string, `char`     | UTF-8 bytes                        |
//!
//! Float text is Rust's shortest round-trip form, not a fixed-precision or
//! exponent rendering: `0.1 + 0.2` gives `0.30000000000000004` and `1e20`
//! gives `100000000000000000000`. Only determinism is required of it.
//!
//! The checksum is the IEEE CRC-32, widened to `u64`.

use std::fmt::{self, Write};

/// Streams formatted text straight into a CRC-32 hasher.
struct ChecksumWriter(crc32fast::Hasher);

impl Write for ChecksumWriter {
    #[inline]
    fn write_str(&mut self, text: &str) -> fmt::Result {
        self.0.update(text.as_bytes());
        Ok(())
    }
}

/// Checksum of raw bytes.
#[inline]
#[must_use]
pub fn checksum_bytes(bytes: &[u8]) -> u64 {
    u64::from(crc32fast::hash(bytes))
}

/// Checksum of a string's UTF-8 bytes.
#[inline]
#[must_use]
pub fn checksum_str(text: &str) -> u64 {
    checksum_bytes(text.as_bytes())
}

/// Checksum of the `Display` output of a value, without allocating.
#[must_use]
pub fn checksum_display<D: fmt::Display + ?Sized>(value: &D) -> u64 {
    let mut writer = ChecksumWriter(crc32fast::Hasher::new());
    // Writing into the hasher itself cannot fail; only a faulty `Display`
    // impl could report an error, and whatever it wrote still counts.
    let _ = write!(writer, "{value}");
    u64::from(writer.0.finalize())
}

/// Checksum of a boolean: `true` is `"1"`, `false` is the empty text.
#[inline]
#[must_use]
pub fn checksum_bool(value: bool) -> u64 {
    if value { checksum_str("1") } else { checksum_str("") }
}

/// Checksum of a double-precision float.
#[must_use]
pub fn checksum_f64(value: f64) -> u64 {
    if value.is_nan() {
        checksum_str("NAN")
    } else if value.is_infinite() {
        checksum_str(if value.is_sign_positive() { "INF" } else { "-INF" })
    } else if value == 0.0 {
        // `-0.0` is strictly equal to `0.0`, so it must hash the same.
        checksum_str("0")
    } else {
        checksum_display(&value)
    }
}

/// Checksum of a single-precision float.
#[must_use]
pub fn checksum_f32(value: f32) -> u64 {
    if value.is_nan() {
        checksum_str("NAN")
    } else if value.is_infinite() {
        checksum_str(if value.is_sign_positive() { "INF" } else { "-INF" })
    } else if value == 0.0 {
        // `-0.0` is strictly equal to `0.0`, so it must hash the same.
        checksum_str("0")
    } else {
        checksum_display(&value)
    }
}
