use std::marker::PhantomData;

use nalgebra::Complex;
use serde::{Deserialize, Serialize};

use crate::model::{Component, IsAnalytic, NotAnalytic, Real, SkyModel};
use crate::ModelError;

/// Unit-flux point source at the origin.
///
/// Its visibility is `1` everywhere. The intensity is a delta function and
/// has no pointwise value, so images of a point source are produced from its
/// Fourier grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point<T = f64> {
    #[serde(skip)]
    _real: PhantomData<T>,
}

impl Point<f64> {
    pub fn unit() -> Self {
        Point::default()
    }
}

impl<T> Default for Point<T> {
    fn default() -> Self {
        Point { _real: PhantomData }
    }
}

impl<T: Real> SkyModel for Point<T> {
    type Real = T;
    type Visibility = IsAnalytic;
    type Intensity = NotAnalytic;

    fn flux(&self) -> T {
        T::one()
    }

    fn radial_extent(&self) -> T {
        T::zero()
    }

    #[inline(always)]
    fn visibility_point(&self, _u: T, _v: T) -> Result<Complex<T>, ModelError> {
        Ok(Complex::new(T::one(), T::zero()))
    }

    fn components(&self) -> Vec<&dyn Component> {
        vec![self as &dyn Component]
    }
}
