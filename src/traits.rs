//! Scalar trait for the dense kernels
//!
//! All kernels in this crate are generic over [`RealField`], a bound bundle for
//! real floating-point scalars. Complex scalars are deliberately not supported:
//! the unpivoted algorithms here are specified over the reals only.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types usable in the dense kernels.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for most uses)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + 'static
{
    /// Magnitude |x|
    fn magnitude(&self) -> Self {
        self.abs()
    }
}

impl RealField for f64 {}
impl RealField for f32 {}
