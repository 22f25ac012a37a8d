use nalgebra::Complex;

use super::{sealed, Combinator, Composite};
use crate::model::{AnalyticAxis, NotAnalytic, Real, SkyModel};
use crate::primitives::{stretched_gaussian, Gaussian};
use crate::ModelError;

/// Multiplication in the Fourier domain, by the convolution theorem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ConvolutionRule;

/// Convolution of two models: `V = V_l * V_r`.
///
/// The intensity axis is never analytic: there is no generic closed form for
/// a convolved image, so intensities always go through the Fourier grid.
pub type Convolution<L, R> = Composite<L, R, ConvolutionRule>;

impl sealed::Sealed for ConvolutionRule {}

impl Combinator for ConvolutionRule {
    const SYMBOL: &'static str = "*";

    type Intensity<L: AnalyticAxis, R: AnalyticAxis> = NotAnalytic;

    #[inline(always)]
    fn uv<T: Real>(left: Complex<T>, right: Complex<T>) -> Complex<T> {
        left * right
    }

    fn xy<T: Real>() -> Option<fn(T, T) -> T> {
        None
    }

    /// Product of the children's transforms at zero frequency
    fn flux<T: Real>(left: T, right: T) -> T {
        left * right
    }

    /// Supports add under convolution, so the bound is `l + r` rather than
    /// the `max(l, r)` a generic composite would report
    fn radial_extent<T: Real>(left: T, right: T) -> T {
        left + right
    }
}

/// Convolve two models.
pub fn convolved<L, R>(left: L, right: R) -> Convolution<L, R>
where
    L: SkyModel,
    R: SkyModel<Real = L::Real>,
{
    Composite::new(left, right)
}

/// Convolve `model` with a zero-centred unit-flux Gaussian of standard deviation `sigma`.
pub fn smoothed<M: SkyModel>(
    model: M,
    sigma: M::Real,
) -> Result<Convolution<M, Gaussian<M::Real>>, ModelError> {
    Ok(convolved(model, stretched_gaussian(sigma, sigma)?))
}
