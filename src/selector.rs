//! Reproducible "random" choices.
//!
//! Every personalised pick (scores, quotes, colours) goes through one hash:
//! the 32-bit polynomial `h = h * 31 + unit` over the UTF-16 code units of
//! the seed, wrapping on overflow, two's-complement. Its magnitude `|h|`
//! indexes into fixed pools. The same seed always gives the same pick, in
//! any language that implements the same hash.

use std::fmt::Display;

/// Joins seed fields with `|`.
///
/// ```
/// use hoangdao::selector::seed;
///
/// assert_eq!("18|4|Đinh Sửu", seed(["18", "4", "Đinh Sửu"]));
/// ```
pub fn seed<I>(fields: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push('|');
        }
        out.push_str(&field.to_string());
    }
    out
}

fn fold_units(units: impl Iterator<Item = u16>) -> i32 {
    units.fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Signed polynomial hash of `seed`.
///
/// ```
/// use hoangdao::selector::hash;
///
/// assert_eq!(99162322, hash("hello"));
/// assert_eq!(-862545276, hash("Hello World"));
/// ```
pub fn hash(seed: &str) -> i32 {
    fold_units(seed.encode_utf16())
}

/// [`hash`] of `seed` with its UTF-16 code units reversed.
pub fn hash_reversed(seed: &str) -> i32 {
    let units: Vec<u16> = seed.encode_utf16().collect();
    fold_units(units.into_iter().rev())
}

/// A seed hashed both ways round, ready to pick from pools.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Selector {
    value: u32,
    reversed: u32,
}

impl Selector {
    pub fn new(seed: &str) -> Self {
        Self {
            value: hash(seed).unsigned_abs(),
            reversed: hash_reversed(seed).unsigned_abs(),
        }
    }
    /// `|hash(seed)|`.
    pub fn value(&self) -> u32 {
        self.value
    }
    /// `|hash(reverse(seed))|`, decorrelated from [`Selector::value`].
    pub fn reversed(&self) -> u32 {
        self.reversed
    }
    /// `(value >> shift) mod modulus`, a view of the hash that varies
    /// independently of the low bits.
    pub fn shifted(&self, shift: u32, modulus: u32) -> u32 {
        (self.value >> shift) % modulus
    }
    /// `pool[value mod len]`. Panics on an empty pool, like [`pick`].
    pub fn pick<'a, T>(&self, pool: &'a [T]) -> &'a T {
        pick(pool, self.value)
    }
    /// `pool[(value + offset) mod len]`.
    pub fn pick_offset<'a, T>(&self, pool: &'a [T], offset: u32) -> &'a T {
        pick(pool, self.value.wrapping_add(offset))
    }
    /// `pool[reversed mod len]`.
    pub fn pick_reversed<'a, T>(&self, pool: &'a [T]) -> &'a T {
        pick(pool, self.reversed)
    }
}

/// `pool[value mod len]`.
///
/// # Panics
///
/// Panics if `pool` is empty.
pub fn pick<T>(pool: &[T], value: u32) -> &T {
    &pool[value as usize % pool.len()]
}
