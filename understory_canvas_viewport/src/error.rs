// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Errors surfaced by [`ViewportController`](crate::ViewportController).
///
/// Missing preconditions (no scroll host yet, no active gesture) are not
/// errors; those calls are no‑ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ViewportError {
    /// The operation is part of the scroll‑info surface but is not implemented.
    ///
    /// Callers should fall back to another strategy.
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported { operation } => {
                write!(f, "viewport operation `{operation}` is not supported")
            }
        }
    }
}

impl core::error::Error for ViewportError {}
