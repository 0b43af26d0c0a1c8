// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fallback resolution: substitute an alternate when a value is absent.
//!
//! Every resolver here shares one contract: if the queried value matches the
//! classification predicate, the alternate is returned; otherwise the kept
//! value must have *exactly* the alternate's runtime type. Exact means exact:
//! a `bool` does not pass where an `i64` is expected, whatever numeric
//! subtyping the caller is used to elsewhere.
//!
//! | Resolver                   | Substitutes when      | Type check |
//! |----------------------------|-----------------------|------------|
//! | [`alt_if_missing`]         | value is `MISSING`    | exact      |
//! | [`alt_if_unset`]           | value is `UNSET`      | exact      |
//! | [`alt_if_ellipsis`]        | value is `ELLIPSIS`   | exact      |
//! | [`fallback_on_none`]       | value is `None`       | none       |
//! | [`fallback_on_none_strict`]| value is `None`       | none, alternate must not be `None` |

use std::any::{type_name, Any};
use std::error::Error;
use std::fmt;

use tracing::trace;

use crate::sentinel::{is_ellipsis, is_missing, is_unset, AnyValue};

/// Error type for fallback resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackError {
    /// The kept value's runtime type does not match the alternate's.
    TypeMismatch {
        /// Type name of the queried value.
        obj_type: &'static str,
        /// Type name of the alternate.
        alt_type: &'static str,
    },
    /// The alternate of a strict `None` fallback was itself `None`.
    NoneAlternate,
}

impl fmt::Display for FallbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackError::TypeMismatch { obj_type, alt_type } => {
                write!(
                    f,
                    "obj and alt must be of the same type. type(obj): {}, type(alt): {}",
                    obj_type, alt_type
                )
            }
            FallbackError::NoneAlternate => {
                write!(f, "default_val must not be None")
            }
        }
    }
}

impl Error for FallbackError {}

/// Shared resolver behind the `alt_if_*` family.
///
/// Kept private: the public wrappers fix the predicate, and the predicate is
/// the interface contract.
fn alt_if_matches<T: Any + Clone>(
    obj: &dyn AnyValue,
    alt: T,
    predicate: fn(&dyn AnyValue) -> bool,
) -> Result<T, FallbackError> {
    if predicate(obj) {
        trace!("substituting alternate of type {}", type_name::<T>());
        return Ok(alt);
    }
    match obj.as_any().downcast_ref::<T>() {
        Some(kept) => Ok(kept.clone()),
        None => Err(FallbackError::TypeMismatch {
            obj_type: obj.type_name(),
            alt_type: type_name::<T>(),
        }),
    }
}

/// Get `alt` if `obj` is the [`MISSING`](crate::MISSING) sentinel, else a
/// clone of `obj`.
///
/// The returned value always has the alternate's type: a supplied `obj` of
/// any other runtime type is a [`FallbackError::TypeMismatch`].
///
/// # Examples
///
/// ```
/// use bedrock::{alt_if_missing, MISSING};
///
/// // Not supplied: the alternate wins.
/// assert_eq!(alt_if_missing(&MISSING, 2).unwrap(), 2);
///
/// // Supplied (even falsy): the value wins.
/// assert_eq!(alt_if_missing(&0, 2).unwrap(), 0);
/// assert_eq!(alt_if_missing(&None::<i32>, None::<i32>).unwrap(), None);
///
/// // Supplied with the wrong type: an error, not a coercion.
/// assert!(alt_if_missing(&"a", 2).is_err());
/// ```
pub fn alt_if_missing<T: Any + Clone>(obj: &dyn AnyValue, alt: T) -> Result<T, FallbackError> {
    alt_if_matches(obj, alt, is_missing)
}

/// Get `alt` if `obj` is the [`UNSET`](crate::UNSET) sentinel, else a clone
/// of `obj`.
///
/// Same contract as [`alt_if_missing`] with the "deliberately cleared"
/// sentinel. `MISSING` is *not* `UNSET`: passing it here is a type mismatch
/// like any other supplied value.
pub fn alt_if_unset<T: Any + Clone>(obj: &dyn AnyValue, alt: T) -> Result<T, FallbackError> {
    alt_if_matches(obj, alt, is_unset)
}

/// Get `alt` if `obj` is the [`ELLIPSIS`](crate::ELLIPSIS) sentinel, else a
/// clone of `obj`.
pub fn alt_if_ellipsis<T: Any + Clone>(obj: &dyn AnyValue, alt: T) -> Result<T, FallbackError> {
    alt_if_matches(obj, alt, is_ellipsis)
}

/// Get `value` if it is non-`None`, else `default_val`.
///
/// The unchecked variant: no sentinel involvement, no type gate (both sides
/// are already `Option<T>`). Falsy values are values.
///
/// # Examples
///
/// ```
/// use bedrock::fallback_on_none;
///
/// assert_eq!(fallback_on_none(Some("a"), Some("b")), Some("a"));
/// assert_eq!(fallback_on_none(None, Some("b")), Some("b"));
///
/// // Falsy is still supplied.
/// assert_eq!(fallback_on_none(Some(0), Some(7)), Some(0));
/// assert_eq!(fallback_on_none(Some(false), Some(true)), Some(false));
///
/// // A None default is returned as-is.
/// assert_eq!(fallback_on_none::<u8>(None, None), None);
/// ```
pub fn fallback_on_none<T>(value: Option<T>, default_val: Option<T>) -> Option<T> {
    value.or(default_val)
}

/// Same as [`fallback_on_none`], with the guarantee that the alternate is
/// never itself a stand-in for absence.
///
/// # Errors
///
/// [`FallbackError::NoneAlternate`] when `default_val` is `None`, whatever
/// `value` holds.
///
/// ```
/// use bedrock::fallback_on_none_strict;
///
/// assert_eq!(fallback_on_none_strict(Some("a"), Some("b")).unwrap(), "a");
/// assert_eq!(fallback_on_none_strict(None, Some("b")).unwrap(), "b");
/// assert!(fallback_on_none_strict(Some("a"), None).is_err());
/// ```
pub fn fallback_on_none_strict<T>(
    value: Option<T>,
    default_val: Option<T>,
) -> Result<T, FallbackError> {
    match default_val {
        Some(default_val) => Ok(value.unwrap_or(default_val)),
        None => Err(FallbackError::NoneAlternate),
    }
}
