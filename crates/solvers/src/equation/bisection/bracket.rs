use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`] or validating bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint in [{left}, {right}]")]
    NonFinite { left: f64, right: f64 },

    /// Endpoints are equal, giving zero width.
    #[error("zero width: both endpoints are {value}")]
    ZeroWidth { value: f64 },

    /// Endpoint residuals share a sign, so the bracket does not straddle a root.
    #[error("no sign change: f({left}) = {left_residual}, f({right}) = {right_residual}")]
    NoSignChange {
        left: f64,
        right: f64,
        left_residual: f64,
        right_residual: f64,
    },
}

/// Current bracket bounds and the residual at the left endpoint.
///
/// Only the left residual is tracked: every shrink decision compares the
/// midpoint residual against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    left_residual: f64,
}

impl Bracket {
    /// Creates a bracket after checking that the endpoint residuals straddle a root.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NoSignChange` if both residuals are non-zero with
    /// the same sign.
    pub(super) fn checked(
        bounds: Bounds,
        left_residual: f64,
        right_residual: f64,
    ) -> Result<Self, BracketError> {
        if same_sign(left_residual, right_residual) {
            return Err(BracketError::NoSignChange {
                left: bounds.left,
                right: bounds.right,
                left_residual,
                right_residual,
            });
        }

        Ok(Self::assumed(bounds, left_residual))
    }

    /// Creates a bracket whose sign change is taken on trust.
    pub(super) fn assumed(bounds: Bounds, left_residual: f64) -> Self {
        Self {
            left: bounds.left,
            right: bounds.right,
            left_residual,
        }
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns true if the bracket width is within the absolute tolerance.
    #[must_use]
    pub fn is_converged(&self, x_abs_tol: f64) -> bool {
        self.width() <= x_abs_tol
    }

    /// Returns true if `x` lies strictly inside the bracket.
    pub(super) fn splits_at(&self, x: f64) -> bool {
        self.left < x && x < self.right
    }

    /// Shrinks the bracket using a new point and its residual.
    ///
    /// Returns true if the point replaced the left endpoint.
    pub(super) fn shrink(&mut self, x: f64, residual: f64) -> bool {
        if same_sign(residual, self.left_residual) {
            self.left = x;
            self.left_residual = residual;
            true
        } else {
            self.right = x;
            false
        }
    }
}

/// Returns true if `f(a) · f(b) > 0` would hold in exact arithmetic.
///
/// Compares signs instead of multiplying, so tiny residuals cannot underflow
/// to a zero product.
fn same_sign(a: f64, b: f64) -> bool {
    a != 0.0 && b != 0.0 && a.is_sign_positive() == b.is_sign_positive()
}

/// Ordered finite bounds for a bisection bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bounds {
    left: f64,
    right: f64,
}

impl Bounds {
    /// Validates and orders the bracket endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(super) fn new(bracket: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bracket;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite { left, right });
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth { value: left });
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }
}
