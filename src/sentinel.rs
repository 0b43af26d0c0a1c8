// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sentinel singletons and identity-based classification.
//!
//! A sentinel stands in for "no real value" in a position where `None` is
//! itself a legitimate value. Each sentinel is a zero-size type with exactly
//! one instance per process and no public constructor, so a runtime type-tag
//! test is an identity test: there is no second instance to confuse it with.
//!
//! | Sentinel     | Meaning                                        |
//! |--------------|------------------------------------------------|
//! | [`MISSING`]  | caller did not supply this argument            |
//! | [`UNSET`]    | caller deliberately cleared a previous value   |
//! | [`ELLIPSIS`] | caller left this position unspecified          |
//!
//! `MISSING` and `UNSET` are independently allocated singletons:
//! `is_unset(&MISSING)` is `false`.
//!
//! # Invariants
//!
//! - Sentinels implement no equality. Comparing one structurally would defeat
//!   the contract; classify with [`is_missing`], [`is_unset`] or
//!   [`is_ellipsis`] instead.
//! - Classification is identity-only. `None`-like values, zeroes, empty
//!   strings and empty containers were all *supplied* by the caller and never
//!   classify as absent.

use std::any::Any;
use std::fmt;

/// Sentinel type for "argument not supplied".
///
/// The only instance is [`MISSING`]; the private field keeps it that way.
pub struct Missing(());

/// Sentinel type for "previously set value deliberately cleared".
///
/// The only instance is [`UNSET`].
pub struct Unset(());

/// Sentinel type for "left unspecified, to be filled in later".
///
/// The only instance is [`ELLIPSIS`].
pub struct Ellipsis(());

/// The process-wide "argument not supplied" sentinel.
///
/// Use as the resting value of a parameter slot whose legitimate values
/// include `None`.
pub static MISSING: Missing = Missing(());

/// The process-wide "deliberately cleared" sentinel.
pub static UNSET: Unset = Unset(());

/// The process-wide "left unspecified" sentinel.
pub static ELLIPSIS: Ellipsis = Ellipsis(());

impl fmt::Debug for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MISSING")
    }
}

impl fmt::Debug for Unset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UNSET")
    }
}

impl fmt::Debug for Ellipsis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ELLIPSIS")
    }
}

/// Type-erased value that retains its concrete type name.
///
/// Every `T: Any` implements this, so any `'static` value coerces to
/// `&dyn AnyValue` at a call site. The type name exists for diagnostics
/// only; dispatch decisions use the type tag behind [`AnyValue::as_any`].
pub trait AnyValue: Any {
    /// Concrete type name of the erased value.
    fn type_name(&self) -> &'static str;

    /// The value as `Any`, for type-tag tests and downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AnyValue for T {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Whether `obj` is the [`MISSING`] sentinel, i.e. not supplied by the caller.
///
/// # Examples
///
/// ```
/// use bedrock::{is_missing, MISSING};
///
/// assert!(is_missing(&MISSING));
///
/// // Supplied-but-None is not missing.
/// assert!(!is_missing(&None::<i32>));
///
/// // Falsy values were supplied too.
/// assert!(!is_missing(&0));
/// assert!(!is_missing(&""));
/// assert!(!is_missing(&false));
/// assert!(!is_missing(&Vec::<u8>::new()));
/// ```
pub fn is_missing(obj: &dyn AnyValue) -> bool {
    obj.as_any().is::<Missing>()
}

/// Whether `obj` is the [`UNSET`] sentinel, i.e. deliberately cleared by the
/// caller.
///
/// ```
/// use bedrock::{is_unset, MISSING, UNSET};
///
/// assert!(is_unset(&UNSET));
/// assert!(!is_unset(&MISSING));
/// assert!(!is_unset(&None::<i32>));
/// ```
pub fn is_unset(obj: &dyn AnyValue) -> bool {
    obj.as_any().is::<Unset>()
}

/// Whether `obj` is the [`ELLIPSIS`] sentinel.
pub fn is_ellipsis(obj: &dyn AnyValue) -> bool {
    obj.as_any().is::<Ellipsis>()
}
