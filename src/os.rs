// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operating-system family oracle.
//!
//! Everything here is answered from `cfg!` at compile time; the functions
//! are `const` and total. The `is_`/`not_` pairs exist so call sites read as
//! the question they ask.

use serde::{Deserialize, Serialize};

/// Broad OS family, for code that branches on platform conventions rather
/// than concrete targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OsFamily {
    /// Windows targets.
    Windows,
    /// Linux targets.
    Linux,
    /// macOS targets.
    Mac,
    /// A Unix that is neither Linux nor macOS (the BSDs et al.).
    OtherUnix,
    /// Anything else (wasm targets, exotic platforms).
    Unknown,
}

impl OsFamily {
    /// Family of the platform this crate was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            OsFamily::Windows
        } else if cfg!(target_os = "linux") {
            OsFamily::Linux
        } else if cfg!(target_os = "macos") {
            OsFamily::Mac
        } else if cfg!(unix) {
            OsFamily::OtherUnix
        } else {
            OsFamily::Unknown
        }
    }

    /// Whether the family follows POSIX conventions.
    pub const fn is_posix(self) -> bool {
        matches!(self, OsFamily::Linux | OsFamily::Mac | OsFamily::OtherUnix)
    }
}

/// Whether the compilation target is Windows.
pub const fn is_windows() -> bool {
    cfg!(target_os = "windows")
}

/// Complement of [`is_windows`].
pub const fn not_windows() -> bool {
    !is_windows()
}

/// Whether the compilation target is Linux.
pub const fn is_linux() -> bool {
    cfg!(target_os = "linux")
}

/// Complement of [`is_linux`].
pub const fn not_linux() -> bool {
    !is_linux()
}

/// Whether the compilation target is macOS.
pub const fn is_mac() -> bool {
    cfg!(target_os = "macos")
}

/// Complement of [`is_mac`].
pub const fn not_mac() -> bool {
    !is_mac()
}

/// Whether the compilation target belongs to the Unix family.
pub const fn is_posix() -> bool {
    cfg!(unix)
}

/// Complement of [`is_posix`].
pub const fn not_posix() -> bool {
    !is_posix()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complements() {
        assert_eq!(not_windows(), !is_windows());
        assert_eq!(not_linux(), !is_linux());
        assert_eq!(not_mac(), !is_mac());
        assert_eq!(not_posix(), !is_posix());
    }

    #[test]
    fn test_families_are_exclusive() {
        let named = [is_windows(), is_linux(), is_mac()];
        assert!(named.iter().filter(|&&b| b).count() <= 1);
    }

    #[test]
    fn test_family_enum_agrees_with_flags() {
        let family = OsFamily::current();
        assert_eq!(family == OsFamily::Windows, is_windows());
        assert_eq!(family == OsFamily::Linux, is_linux());
        assert_eq!(family == OsFamily::Mac, is_mac());
        assert_eq!(family.is_posix(), is_posix());
    }

    #[test]
    fn test_family_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OsFamily::OtherUnix).unwrap(),
            "\"other_unix\""
        );
        let back: OsFamily = serde_json::from_str("\"windows\"").unwrap();
        assert_eq!(back, OsFamily::Windows);
    }

    #[test]
    fn test_windows_is_not_posix() {
        assert!(!OsFamily::Windows.is_posix());
        assert!(OsFamily::Linux.is_posix());
        assert!(OsFamily::Mac.is_posix());
        assert!(OsFamily::OtherUnix.is_posix());
        assert!(!OsFamily::Unknown.is_posix());
    }
}
