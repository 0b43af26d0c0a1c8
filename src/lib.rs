// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Foundation utilities: identity sentinels, fallback resolution, and
//! predicate-driven search.
//!
//! The crate's center of gravity is the sentinel system: distinguished
//! singleton values for "argument not supplied" ([`MISSING`]), "argument
//! deliberately cleared" ([`UNSET`]) and "left unspecified" ([`ELLIPSIS`]),
//! plus resolvers that substitute an alternate when a queried value is one of
//! them. The resolvers insist that the kept value's runtime type match the
//! alternate's exactly.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐
//! │ sentinel.rs  │────▶│  fallback.rs  │
//! │ (MISSING,    │     │ (alt_if_*,    │
//! │  UNSET, ...) │     │  fallback_*)  │
//! └──────────────┘     └───────────────┘
//!
//! ┌──────────────┐   ┌──────────┐   ┌──────────┐   ┌───────────┐
//! │  search.rs   │   │  os.rs   │   │  ops.rs  │   │ state.rs  │
//! │ (first/last  │   │ (family  │   │ (op      │   │ (done     │
//! │ by predicate)│   │  oracle) │   │  traits) │   │ protocol) │
//! └──────────────┘   └──────────┘   └──────────┘   └───────────┘
//! ```
//!
//! The bottom row is independent of the sentinel system; each module is a
//! self-contained helper family.
//!
//! # Usage
//!
//! ```
//! use bedrock::{alt_if_missing, get_first_true, MISSING};
//!
//! // A position that must distinguish "not supplied" from a real `None`.
//! assert_eq!(alt_if_missing(&MISSING, 30).unwrap(), 30);
//! assert_eq!(alt_if_missing(&7, 30).unwrap(), 7);
//!
//! // First element satisfying a predicate, with a default.
//! assert_eq!(*get_first_true(&[1, 2, 3], &-1, |n| *n > 1), 2);
//! ```

// Module declarations
mod fallback;
mod ops;
mod os;
mod search;
mod sentinel;
mod state;

// Re-exports for public API
pub use fallback::{
    alt_if_ellipsis, alt_if_missing, alt_if_unset, fallback_on_none, fallback_on_none_strict,
    FallbackError,
};
pub use ops::{
    require_exactly_one, require_exactly_one_named, ExclusivityError, FixedRootDirOp,
    ReversibleOp, RootDirOp,
};
pub use os::{
    is_linux, is_mac, is_posix, is_windows, not_linux, not_mac, not_posix, not_windows, OsFamily,
};
pub use search::{
    get_first_true, get_first_true_by, get_last_true, try_get_first_true, try_get_last_true,
};
pub use sentinel::{
    is_ellipsis, is_missing, is_unset, AnyValue, Ellipsis, Missing, Unset, ELLIPSIS, MISSING,
    UNSET,
};
pub use state::{DelegatingDoneVisitor, DoneEnquirer, DoneFlag, DoneMarker, DoneVisitor};
