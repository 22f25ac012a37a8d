//! The model trait and the combinator algebra built on it.
//!
//! A model is either a leaf (anything in [`crate::primitives`], a [`Scaled`]
//! modifier, or a user type implementing [`SkyModel`]) or a [`Composite`] node
//! over two models. Both axes of analyticity are associated types, so every
//! composite's evaluation strategy is fixed by its type.

pub mod analyticity;
pub mod composite;
mod ops;
mod scaled;

use std::any::Any;
use std::fmt::Debug;

use nalgebra::{Complex, RealField};
use ndarray::{Array1, Array2, ArrayView1};

pub use analyticity::{AnalyticAxis, Analyticity, Both, IsAnalytic, NotAnalytic};
pub use composite::{
    add, convolved, smoothed, subtract, Combinator, Composite, Convolution, ConvolutionRule, Sum,
    SumRule,
};
pub use scaled::{scale, Scaled};

use crate::evaluate::{sample_fourier_grid, sample_image_grid, sample_visibilities};
use crate::fourier::{FourierEngine, GridSpec};
use crate::ModelError;

/// Real scalar type a model is expressed in.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}

#[inline(always)]
pub(crate) fn real<T: Real>(x: f64) -> T {
    nalgebra::convert(x)
}

/// A sky brightness distribution and its Fourier-domain visibility.
///
/// Leaf models implement the required methods plus the pointwise evaluators
/// for every axis they declare [`IsAnalytic`]. The grid and batch methods have
/// defaults that derive them from the pointwise evaluators (or from the
/// engine, when only one axis is analytic); leaves that are analytic on
/// neither axis must override them.
///
/// # Example
/// ```ignore
/// use vismodels::prelude::*;
///
/// let m = Gaussian::unit() + scale(stretched_gaussian(2.0, 2.0)?, 0.5);
/// assert_eq!(m.flux(), 1.5);
/// let v = m.visibility_point(0.1, 0.0)?;
/// ```
pub trait SkyModel: Clone + Debug + Send + Sync + 'static {
    /// Scalar precision of the model
    type Real: Real;
    /// Whether visibilities have a closed form
    type Visibility: AnalyticAxis;
    /// Whether intensities have a closed form
    type Intensity: AnalyticAxis;

    /// Total integrated brightness, the visibility at zero spatial frequency.
    fn flux(&self) -> Self::Real;

    /// Radius bounding the model's support, used to size evaluation grids.
    fn radial_extent(&self) -> Self::Real;

    /// Closed-form visibility at spatial frequency `(u, v)`.
    fn visibility_point(
        &self,
        _u: Self::Real,
        _v: Self::Real,
    ) -> Result<Complex<Self::Real>, ModelError> {
        Err(ModelError::missing::<Self>("pointwise visibility"))
    }

    /// Closed-form intensity at image position `(x, y)`.
    fn intensity_point(&self, _x: Self::Real, _y: Self::Real) -> Result<Self::Real, ModelError> {
        Err(ModelError::missing::<Self>("pointwise intensity"))
    }

    /// Visibilities at every `(u[k], v[k])`.
    fn visibilities<E: FourierEngine<Self::Real>>(
        &self,
        u: ArrayView1<Self::Real>,
        v: ArrayView1<Self::Real>,
        engine: &E,
    ) -> Result<Array1<Complex<Self::Real>>, ModelError> {
        if <Self::Visibility as AnalyticAxis>::IS_ANALYTIC {
            sample_visibilities(self, u, v, engine.executor())
        } else {
            Err(ModelError::missing::<Self>("batch visibilities"))
        }
    }

    /// Fourier-domain samples on the centred frequencies of `grid`.
    fn fouriermap<E: FourierEngine<Self::Real>>(
        &self,
        grid: &GridSpec<Self::Real>,
        engine: &E,
    ) -> Result<Array2<Complex<Self::Real>>, ModelError> {
        if <Self::Visibility as AnalyticAxis>::IS_ANALYTIC {
            sample_fourier_grid(self, grid, engine.executor())
        } else if <Self::Intensity as AnalyticAxis>::IS_ANALYTIC {
            let image = sample_image_grid(self, grid, engine.executor())?;
            engine.forward(image.view(), grid)
        } else {
            Err(ModelError::missing::<Self>("fouriermap"))
        }
    }

    /// Intensities on the pixel centres of `grid`.
    fn intensitymap<E: FourierEngine<Self::Real>>(
        &self,
        grid: &GridSpec<Self::Real>,
        engine: &E,
    ) -> Result<Array2<Self::Real>, ModelError> {
        if <Self::Intensity as AnalyticAxis>::IS_ANALYTIC {
            sample_image_grid(self, grid, engine.executor())
        } else if <Self::Visibility as AnalyticAxis>::IS_ANALYTIC {
            let fourier = sample_fourier_grid(self, grid, engine.executor())?;
            engine.inverse(fourier.view(), grid)
        } else {
            Err(ModelError::missing::<Self>("intensitymap"))
        }
    }

    /// Primitive leaves of the model, left to right in construction order.
    fn components(&self) -> Vec<&dyn Component>;
}

/// Type-erased view of a leaf returned by [`SkyModel::components`].
pub trait Component: Any + Debug + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;

    /// Fully qualified type name of the leaf
    fn type_name(&self) -> &'static str;
}

impl<M: SkyModel> Component for M {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<M>()
    }
}

impl dyn Component {
    /// Recover the concrete leaf, if it is an `M`.
    pub fn downcast_ref<M: 'static>(&self) -> Option<&M> {
        self.as_any().downcast_ref::<M>()
    }

    pub fn is<M: 'static>(&self) -> bool {
        self.as_any().is::<M>()
    }
}
