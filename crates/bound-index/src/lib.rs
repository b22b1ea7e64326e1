//! Boundary-condition index wrapping for numerical image processing.
//!
//! Filters, interpolators and deformation solvers regularly read outside the
//! array they operate on. This crate maps such an out-of-range index back into
//! `[0, m)` according to a boundary condition.
//!
//! # Overview
//!
//! - [`mode`]: [`BoundaryMode`], the supported conditions and their host
//!   integer codes
//!   - **Circulant** treats the axis as cyclic (`... 2 3 | 0 1 2 3 | 0 1 ...`)
//!   - **Neumann** mirrors at both edges, repeating the edge element
//!     (`... 1 0 | 0 1 2 3 | 3 2 ...`)
//! - [`mapping`]: stateless functions for each condition
//! - [`selector`]: [`BoundarySelector`], an atomically switchable mode, plus a
//!   process-wide selector for hosts that expect a single global switch
//! - [`error`]: [`BoundaryError`], raised for unknown codes or names
//!
//! # Examples
//!
//! Thread the mode explicitly:
//!
//! ```
//! use bound_index::BoundaryMode;
//!
//! let mode = BoundaryMode::Neumann;
//! let row: Vec<_> = (-2..6).map(|i| mode.wrap(i, 4)).collect();
//! assert_eq!(row, [1, 0, 0, 1, 2, 3, 3, 2]);
//! ```
//!
//! Or use the process-wide switch:
//!
//! ```
//! use bound_index::{BoundaryMode, boundary_mode, set_boundary_code, wrap};
//!
//! assert_eq!(boundary_mode(), BoundaryMode::Circulant);
//! assert_eq!(wrap(-1, 4), 3);
//!
//! set_boundary_code(BoundaryMode::NEUMANN_CODE)?;
//! assert_eq!(wrap(-1, 4), 0);
//! # Ok::<(), bound_index::BoundaryError>(())
//! ```

pub mod error;
pub mod mapping;
pub mod mode;
pub mod selector;

pub use self::{
    error::BoundaryError,
    mapping::{wrap_circulant, wrap_neumann},
    mode::BoundaryMode,
    selector::{
        BoundarySelector, boundary_code, boundary_mode, global, set_boundary_code,
        set_boundary_mode, wrap,
    },
};
