//! Boundary-condition modes.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{BoundaryError, mapping};

/// The policy used to map an out-of-range index back into `[0, m)`.
///
/// # Examples
///
/// ```
/// use bound_index::BoundaryMode;
///
/// assert_eq!(BoundaryMode::Circulant.wrap(-1, 4), 3);
/// assert_eq!(BoundaryMode::Neumann.wrap(-1, 4), 0);
///
/// // Host runtimes select the mode by integer code
/// let mode = BoundaryMode::from_code(1).unwrap();
/// assert_eq!(mode, BoundaryMode::Neumann);
/// assert_eq!(mode.code(), 1);
///
/// // or by name
/// let mode: BoundaryMode = "periodic".parse().unwrap();
/// assert_eq!(mode, BoundaryMode::Circulant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum BoundaryMode {
    /// Periodic wrap-around: the axis is treated as cyclic.
    ///
    /// For `m = 4`, indices `-2..8` map to `2 3 0 1 2 3 0 1 2 3`.
    #[default]
    Circulant = 0,
    /// Reflective wrap: indices mirror at both edges, repeating the edge element.
    ///
    /// For `m = 4`, indices `-2..8` map to `1 0 0 1 2 3 3 2 1 0`.
    Neumann = 1,
}

impl BoundaryMode {
    /// Integer code selecting [`BoundaryMode::Circulant`].
    pub const CIRCULANT_CODE: i32 = 0;
    /// Integer code selecting [`BoundaryMode::Neumann`].
    pub const NEUMANN_CODE: i32 = 1;

    /// Array containing every supported mode.
    pub const ALL: [Self; 2] = [Self::Circulant, Self::Neumann];

    /// Looks up the mode for a host integer code.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::UndefinedBoundary`] if `code` is neither
    /// [`CIRCULANT_CODE`](Self::CIRCULANT_CODE) nor
    /// [`NEUMANN_CODE`](Self::NEUMANN_CODE).
    pub fn from_code(code: i32) -> Result<Self, BoundaryError> {
        match code {
            Self::CIRCULANT_CODE => Ok(Self::Circulant),
            Self::NEUMANN_CODE => Ok(Self::Neumann),
            _ => Err(BoundaryError::UndefinedBoundary { code }),
        }
    }

    /// Returns the host integer code of this mode.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Circulant => Self::CIRCULANT_CODE,
            Self::Neumann => Self::NEUMANN_CODE,
        }
    }

    /// Returns the canonical lowercase name of this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circulant => "circulant",
            Self::Neumann => "neumann",
        }
    }

    /// Maps `i` into `[0, m)` under this mode.
    ///
    /// # Panics
    ///
    /// Panics if `m` is zero or greater than `isize::MAX`.
    #[must_use]
    #[inline]
    pub fn wrap(self, i: isize, m: usize) -> usize {
        match self {
            Self::Circulant => mapping::wrap_circulant(i, m),
            Self::Neumann => mapping::wrap_neumann(i, m),
        }
    }

    pub(crate) const fn to_bits(self) -> u8 {
        self as u8
    }

    // Only values written by `to_bits` are ever stored.
    pub(crate) const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Circulant,
            _ => Self::Neumann,
        }
    }
}

impl Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for BoundaryMode {
    type Err = BoundaryError;

    /// Parses `circulant`/`periodic` or `neumann`/`reflective`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.eq_ignore_ascii_case("circulant") || name.eq_ignore_ascii_case("periodic") {
            Ok(Self::Circulant)
        } else if name.eq_ignore_ascii_case("neumann") || name.eq_ignore_ascii_case("reflective")
        {
            Ok(Self::Neumann)
        } else {
            Err(BoundaryError::UnknownName {
                name: s.to_owned(),
            })
        }
    }
}

impl TryFrom<i32> for BoundaryMode {
    type Error = BoundaryError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<BoundaryMode> for i32 {
    fn from(mode: BoundaryMode) -> i32 {
        mode.code()
    }
}
