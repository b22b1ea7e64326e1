//! Runtime selection of the active boundary condition.
//!
//! A [`BoundarySelector`] holds one [`BoundaryMode`] that can be swapped while
//! other threads keep wrapping indices. Code that owns its configuration should
//! create a selector and pass it where it is needed. Hosts that expect a single
//! process-wide switch use the free functions in this module, which operate on
//! the [`global`] selector.
//!
//! # Examples
//!
//! ```
//! use bound_index::{BoundaryMode, BoundarySelector};
//!
//! let selector = BoundarySelector::new(BoundaryMode::Circulant);
//! assert_eq!(selector.wrap(-1, 4), 3);
//!
//! selector.set_mode(BoundaryMode::Neumann);
//! assert_eq!(selector.wrap(-1, 4), 0);
//!
//! // Unknown codes are rejected and leave the mode unchanged
//! assert!(selector.set_code(9).is_err());
//! assert_eq!(selector.mode(), BoundaryMode::Neumann);
//! ```

use portable_atomic::{AtomicU8, Ordering};

use crate::{BoundaryError, BoundaryMode};

static GLOBAL: BoundarySelector = BoundarySelector::new(BoundaryMode::Circulant);

/// An atomically switchable boundary condition.
///
/// The mode guards no other data, so all accesses use relaxed ordering; every
/// [`wrap`](Self::wrap) call observes one complete mode.
#[derive(Debug)]
pub struct BoundarySelector {
    mode: AtomicU8,
}

impl BoundarySelector {
    /// Creates a selector with the given initial mode.
    #[must_use]
    pub const fn new(mode: BoundaryMode) -> Self {
        Self {
            mode: AtomicU8::new(mode.to_bits()),
        }
    }

    /// Returns the active mode.
    #[must_use]
    #[inline]
    pub fn mode(&self) -> BoundaryMode {
        BoundaryMode::from_bits(self.mode.load(Ordering::Relaxed))
    }

    /// Returns the host integer code of the active mode.
    #[must_use]
    pub fn code(&self) -> i32 {
        self.mode().code()
    }

    /// Replaces the active mode.
    pub fn set_mode(&self, mode: BoundaryMode) {
        let previous = self.replace(mode);
        if previous != mode {
            log::debug!("boundary condition changed: {previous} -> {mode}");
        }
    }

    /// Replaces the active mode with the one named by a host integer code.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::UndefinedBoundary`] if `code` is not a known
    /// mode. The active mode is left unchanged in that case.
    pub fn set_code(&self, code: i32) -> Result<(), BoundaryError> {
        let mode = BoundaryMode::from_code(code).inspect_err(|_| {
            log::warn!("rejected undefined boundary condition code {code}");
        })?;
        self.set_mode(mode);
        Ok(())
    }

    /// Replaces the active mode, returning the previous one.
    pub fn replace(&self, mode: BoundaryMode) -> BoundaryMode {
        BoundaryMode::from_bits(self.mode.swap(mode.to_bits(), Ordering::Relaxed))
    }

    /// Maps `i` into `[0, m)` under the active mode.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero or greater than `isize::MAX`.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn wrap(&self, i: isize, m: usize) -> usize {
        self.mode().wrap(i, m)
    }
}

impl Default for BoundarySelector {
    fn default() -> Self {
        Self::new(BoundaryMode::default())
    }
}

impl From<BoundaryMode> for BoundarySelector {
    fn from(mode: BoundaryMode) -> Self {
        Self::new(mode)
    }
}

/// Returns the process-wide selector, initialized to [`BoundaryMode::Circulant`].
#[must_use]
pub fn global() -> &'static BoundarySelector {
    &GLOBAL
}

/// Maps `i` into `[0, m)` under the process-wide mode.
///
/// # Panics
///
/// Panics if `m` is zero or greater than `isize::MAX`.
#[must_use]
#[inline]
#[track_caller]
pub fn wrap(i: isize, m: usize) -> usize {
    GLOBAL.wrap(i, m)
}

/// Sets the process-wide mode.
pub fn set_boundary_mode(mode: BoundaryMode) {
    GLOBAL.set_mode(mode);
}

/// Sets the process-wide mode from a host integer code.
///
/// # Errors
///
/// Returns [`BoundaryError::UndefinedBoundary`] if `code` is not a known mode,
/// leaving the process-wide mode unchanged.
pub fn set_boundary_code(code: i32) -> Result<(), BoundaryError> {
    GLOBAL.set_code(code)
}

/// Returns the process-wide mode.
#[must_use]
pub fn boundary_mode() -> BoundaryMode {
    GLOBAL.mode()
}

/// Returns the host integer code of the process-wide mode.
#[must_use]
pub fn boundary_code() -> i32 {
    GLOBAL.code()
}
