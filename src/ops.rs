// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small operation interfaces: reversible operations and root-directory
//! bearing operations.
//!
//! These traits are seams, not machinery. An operation that can run
//! backwards exposes [`ReversibleOp::rev`]; an operation anchored somewhere
//! in the filesystem exposes [`RootDirOp::root_dir`]. Call sites that accept
//! *either* a raw path *or* a ready-made [`RootDirOp`] gate themselves with
//! [`require_exactly_one`].

use std::error::Error;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Operation that can be reversed or act in the reversed mode.
pub trait ReversibleOp {
    /// Whether the operation is currently operating in reverse.
    fn rev(&self) -> bool;
}

/// Operation anchored at a root directory.
pub trait RootDirOp {
    /// Path to the root directory for this operation.
    fn root_dir(&self) -> &Path;
}

/// [`RootDirOp`] backed by a stored path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRootDirOp {
    root_dir: PathBuf,
}

impl FixedRootDirOp {
    /// Anchor at the given path. The path is stored as supplied, not
    /// canonicalized.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use bedrock::{FixedRootDirOp, RootDirOp};
    ///
    /// let op = FixedRootDirOp::new("/tmp");
    /// assert_eq!(op.root_dir(), Path::new("/tmp"));
    /// ```
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Anchor at the process's current working directory.
    ///
    /// # Errors
    ///
    /// Propagates the `std::env::current_dir` failure.
    pub fn in_current_dir() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

impl RootDirOp for FixedRootDirOp {
    fn root_dir(&self) -> &Path {
        &self.root_dir
    }
}

/// Error type for "exactly one of two arguments" preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusivityError {
    /// Neither argument was supplied.
    Neither {
        /// Name of the first argument, for the message.
        first: &'static str,
        /// Name of the second argument.
        second: &'static str,
    },
    /// Both arguments were supplied.
    Both {
        /// Name of the first argument.
        first: &'static str,
        /// Name of the second argument.
        second: &'static str,
    },
}

impl fmt::Display for ExclusivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusivityError::Neither { first, second } => {
                write!(f, "either {} or {} is required", first, second)
            }
            ExclusivityError::Both { first, second } => {
                write!(f, "{} and {} are not allowed together", first, second)
            }
        }
    }
}

impl Error for ExclusivityError {}

/// Require that exactly one of a raw root path or a root-dir operation was
/// supplied.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use bedrock::{require_exactly_one, FixedRootDirOp};
///
/// assert!(require_exactly_one(Some(Path::new("/tmp")), None).is_ok());
///
/// let op = FixedRootDirOp::new("/tmp");
/// assert!(require_exactly_one(None, Some(&op)).is_ok());
///
/// assert!(require_exactly_one(None, None).is_err());
/// assert!(require_exactly_one(Some(Path::new("/tmp")), Some(&op)).is_err());
/// ```
///
/// # Errors
///
/// [`ExclusivityError::Neither`] or [`ExclusivityError::Both`].
pub fn require_exactly_one(
    root_dir: Option<&Path>,
    root_dir_op: Option<&dyn RootDirOp>,
) -> Result<(), ExclusivityError> {
    require_exactly_one_named(root_dir, root_dir_op, "root_dir", "root_dir_op")
}

/// [`require_exactly_one`] with caller-chosen argument names in the error
/// message.
pub fn require_exactly_one_named(
    root_dir: Option<&Path>,
    root_dir_op: Option<&dyn RootDirOp>,
    root_dir_name: &'static str,
    root_dir_op_name: &'static str,
) -> Result<(), ExclusivityError> {
    match (root_dir, root_dir_op) {
        (None, None) => {
            debug!(
                "rejecting call: neither {} nor {} supplied",
                root_dir_name, root_dir_op_name
            );
            Err(ExclusivityError::Neither {
                first: root_dir_name,
                second: root_dir_op_name,
            })
        }
        (Some(_), Some(_)) => {
            debug!(
                "rejecting call: both {} and {} supplied",
                root_dir_name, root_dir_op_name
            );
            Err(ExclusivityError::Both {
                first: root_dir_name,
                second: root_dir_op_name,
            })
        }
        _ => Ok(()),
    }
}
