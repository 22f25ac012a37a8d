use nalgebra::Complex;

use super::{sealed, Combinator, Composite};
use crate::model::{real, scale, AnalyticAxis, Both, Real, Scaled, SkyModel};

/// Pointwise addition in both domains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SumRule;

/// Sum of two models: `V = V_l + V_r`, `I = I_l + I_r`.
pub type Sum<L, R> = Composite<L, R, SumRule>;

impl sealed::Sealed for SumRule {}

fn add_real<T: Real>(left: T, right: T) -> T {
    left + right
}

impl Combinator for SumRule {
    const SYMBOL: &'static str = "+";

    type Intensity<L: AnalyticAxis, R: AnalyticAxis> = Both<L, R>;

    #[inline(always)]
    fn uv<T: Real>(left: Complex<T>, right: Complex<T>) -> Complex<T> {
        left + right
    }

    fn xy<T: Real>() -> Option<fn(T, T) -> T> {
        Some(add_real::<T>)
    }

    fn flux<T: Real>(left: T, right: T) -> T {
        left + right
    }

    /// The support of a sum is the union of the supports
    fn radial_extent<T: Real>(left: T, right: T) -> T {
        left.max(right)
    }
}

/// Add two models.
pub fn add<L, R>(left: L, right: R) -> Sum<L, R>
where
    L: SkyModel,
    R: SkyModel<Real = L::Real>,
{
    Composite::new(left, right)
}

/// Subtract `right` from `left`, i.e. add `right` scaled by `-1`.
///
/// No check is made that the resulting brightness stays non-negative.
pub fn subtract<L, R>(left: L, right: R) -> Sum<L, Scaled<R>>
where
    L: SkyModel,
    R: SkyModel<Real = L::Real>,
{
    add(left, scale(right, real(-1.0)))
}
