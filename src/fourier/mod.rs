//! The seam between the model algebra and a numerical Fourier transform.
//!
//! The crate never transforms grids itself. Non-analytic evaluation combines
//! frequency-domain grids produced by the models and hands them to a
//! [`FourierEngine`] for the forward, inverse and non-uniform transforms. The
//! engine also owns the choice of [`Executor`] used for pointwise batches.

mod grid;

pub use grid::GridSpec;

use nalgebra::Complex;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{ModelError, Real};

/// Execution strategy for pointwise batch evaluation.
///
/// Results are always returned in input order, whichever strategy is used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Executor {
    #[default]
    Serial,
    /// Data parallelism on the global rayon pool
    Threaded,
}

impl Executor {
    /// Evaluate `f` for every index in `0..n`, stopping at the first error.
    pub(crate) fn collect<O, F>(self, n: usize, f: F) -> Result<Vec<O>, ModelError>
    where
        O: Send,
        F: Fn(usize) -> Result<O, ModelError> + Send + Sync,
    {
        match self {
            Executor::Serial => (0..n).map(f).collect(),
            Executor::Threaded => (0..n).into_par_iter().map(f).collect(),
        }
    }
}

/// Numerical transforms between image grids and their Fourier duals.
///
/// All grids follow the conventions of [`GridSpec`]: image samples at pixel
/// centres, Fourier samples at centred frequencies, shape `(nx, ny)`.
pub trait FourierEngine<T: Real>: Send + Sync {
    /// Executor used for pointwise evaluation of analytic models
    fn executor(&self) -> Executor {
        Executor::Serial
    }

    /// Transform an intensity grid into Fourier samples on the dual grid.
    fn forward(
        &self,
        image: ArrayView2<T>,
        grid: &GridSpec<T>,
    ) -> Result<Array2<Complex<T>>, ModelError>;

    /// Phase-centre and inverse-transform Fourier samples into an intensity grid.
    ///
    /// Implementations normalise the result so that it is an intensity, i.e.
    /// `inverse(forward(image)) == image`.
    fn inverse(
        &self,
        fourier: ArrayView2<Complex<T>>,
        grid: &GridSpec<T>,
    ) -> Result<Array2<T>, ModelError>;

    /// Non-uniform forward transform of an intensity grid at arbitrary `(u, v)`.
    fn sample(
        &self,
        image: ArrayView2<T>,
        grid: &GridSpec<T>,
        u: ArrayView1<T>,
        v: ArrayView1<T>,
    ) -> Result<Array1<Complex<T>>, ModelError>;
}

impl<T: Real, E: FourierEngine<T> + ?Sized> FourierEngine<T> for &E {
    fn executor(&self) -> Executor {
        (**self).executor()
    }

    fn forward(
        &self,
        image: ArrayView2<T>,
        grid: &GridSpec<T>,
    ) -> Result<Array2<Complex<T>>, ModelError> {
        (**self).forward(image, grid)
    }

    fn inverse(
        &self,
        fourier: ArrayView2<Complex<T>>,
        grid: &GridSpec<T>,
    ) -> Result<Array2<T>, ModelError> {
        (**self).inverse(fourier, grid)
    }

    fn sample(
        &self,
        image: ArrayView2<T>,
        grid: &GridSpec<T>,
        u: ArrayView1<T>,
        v: ArrayView1<T>,
    ) -> Result<Array1<Complex<T>>, ModelError> {
        (**self).sample(image, grid, u, v)
    }
}

/// Engine for trees that never leave the analytic path.
///
/// Every transform fails with [`ModelError::CapabilityMissing`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyticOnly {
    executor: Executor,
}

impl AnalyticOnly {
    pub fn new(executor: Executor) -> Self {
        AnalyticOnly { executor }
    }
}

impl<T: Real> FourierEngine<T> for AnalyticOnly {
    fn executor(&self) -> Executor {
        self.executor
    }

    fn forward(
        &self,
        _image: ArrayView2<T>,
        _grid: &GridSpec<T>,
    ) -> Result<Array2<Complex<T>>, ModelError> {
        Err(ModelError::missing::<Self>("forward Fourier transform"))
    }

    fn inverse(
        &self,
        _fourier: ArrayView2<Complex<T>>,
        _grid: &GridSpec<T>,
    ) -> Result<Array2<T>, ModelError> {
        Err(ModelError::missing::<Self>("inverse Fourier transform"))
    }

    fn sample(
        &self,
        _image: ArrayView2<T>,
        _grid: &GridSpec<T>,
        _u: ArrayView1<T>,
        _v: ArrayView1<T>,
    ) -> Result<Array1<Complex<T>>, ModelError> {
        Err(ModelError::missing::<Self>("non-uniform Fourier transform"))
    }
}
