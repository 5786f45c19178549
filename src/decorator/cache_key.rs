//! Stable cache keys for memoization.
//!
//! A memoized function indexes its results by a [`StableKey`] derived from
//! the call argument through [`CacheKey`]. Keys are implemented for the
//! primitive types; anything else must opt in by implementing `CacheKey`.

/// A stable, comparable representation of a call argument.
///
/// Floats are stored as bit patterns after normalization: `-0.0` and `0.0`
/// share a key, and every NaN shares one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StableKey {
    /// The unit value.
    Unit,
    /// A boolean.
    Bool(bool),
    /// Any integer up to 64 bits, signed or unsigned.
    Integer(i128),
    /// A normalized `f64` bit pattern.
    Float(u64),
    /// A character.
    Char(char),
    /// A string.
    Text(String),
    /// The shared key for arguments with no primitive representation.
    ///
    /// Every argument mapped to `Opaque` collides with every other one, so a
    /// memoized function returns the first cached result for all of them.
    Opaque,
}

impl StableKey {
    /// Builds the key for a float, normalizing signed zero and NaN.
    #[must_use]
    pub fn from_float(value: f64) -> Self {
        let normalized = if value.is_nan() {
            f64::NAN
        } else if value == 0.0 {
            0.0
        } else {
            value
        };
        Self::Float(normalized.to_bits())
    }
}

/// Types that can be turned into a [`StableKey`].
///
/// # Examples
///
/// ```rust
/// use combinars::decorator::{CacheKey, StableKey};
///
/// struct UserId(u32);
///
/// impl CacheKey for UserId {
///     fn cache_key(&self) -> StableKey {
///         self.0.cache_key()
///     }
/// }
///
/// assert_eq!(UserId(7).cache_key(), StableKey::Integer(7));
/// ```
pub trait CacheKey {
    /// Returns the key under which results for `self` are cached.
    fn cache_key(&self) -> StableKey;
}

impl CacheKey for () {
    fn cache_key(&self) -> StableKey {
        StableKey::Unit
    }
}

impl CacheKey for bool {
    fn cache_key(&self) -> StableKey {
        StableKey::Bool(*self)
    }
}

macro_rules! impl_cache_key_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl CacheKey for $integer {
                fn cache_key(&self) -> StableKey {
                    StableKey::Integer(i128::from(*self))
                }
            }
        )*
    };
}

impl_cache_key_for_integers!(i8, i16, i32, i64, u8, u16, u32, u64);

impl CacheKey for isize {
    fn cache_key(&self) -> StableKey {
        // isize is at most 64 bits on every supported target.
        StableKey::Integer(*self as i128)
    }
}

impl CacheKey for usize {
    fn cache_key(&self) -> StableKey {
        StableKey::Integer(*self as i128)
    }
}

impl CacheKey for f32 {
    fn cache_key(&self) -> StableKey {
        StableKey::from_float(f64::from(*self))
    }
}

impl CacheKey for f64 {
    fn cache_key(&self) -> StableKey {
        StableKey::from_float(*self)
    }
}

impl CacheKey for char {
    fn cache_key(&self) -> StableKey {
        StableKey::Char(*self)
    }
}

impl CacheKey for str {
    fn cache_key(&self) -> StableKey {
        StableKey::Text(self.to_owned())
    }
}

impl CacheKey for String {
    fn cache_key(&self) -> StableKey {
        StableKey::Text(self.clone())
    }
}

impl<T: CacheKey + ?Sized> CacheKey for &T {
    fn cache_key(&self) -> StableKey {
        (**self).cache_key()
    }
}

impl<T: CacheKey + ?Sized> CacheKey for Box<T> {
    fn cache_key(&self) -> StableKey {
        (**self).cache_key()
    }
}
