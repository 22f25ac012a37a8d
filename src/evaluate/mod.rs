//! Evaluation entry points for any model, primitive or composite.
//!
//! Each function forwards to the corresponding [`SkyModel`] method. Composite
//! nodes decide at every level, from their type, whether to evaluate their
//! children pointwise or to take the numerical path through the engine.
//!
//! ```ignore
//! use vismodels::prelude::*;
//!
//! let model = smoothed(Point::unit() + scale(Gaussian::unit(), 2.0), 0.5)?;
//! let vis = visibilities(&model, u.view(), v.view(), &AnalyticOnly::default())?;
//! let image = intensitymap(&model, &GridSpec::square(20.0, 128)?, &engine)?;
//! ```

use nalgebra::Complex;
use ndarray::{Array1, Array2, ArrayView1};

use crate::fourier::{Executor, FourierEngine, GridSpec};
use crate::model::{AnalyticAxis, Analyticity, Component, SkyModel};
use crate::primitives::ImageModel;
use crate::ModelError;

/// Visibility of `model` at a single spatial frequency.
///
/// Only defined when the visibility axis is analytic; use [`visibilities`]
/// for models that need the engine.
pub fn visibility<M: SkyModel>(
    model: &M,
    u: M::Real,
    v: M::Real,
) -> Result<Complex<M::Real>, ModelError> {
    model.visibility_point(u, v)
}

/// Visibilities of `model` at each `(u[k], v[k])`, in input order.
pub fn visibilities<M: SkyModel, E: FourierEngine<M::Real>>(
    model: &M,
    u: ArrayView1<M::Real>,
    v: ArrayView1<M::Real>,
    engine: &E,
) -> Result<Array1<Complex<M::Real>>, ModelError> {
    model.visibilities(u, v, engine)
}

/// Intensity of `model` at a single image position.
///
/// Only defined when the intensity axis is analytic; use [`intensitymap`]
/// otherwise.
pub fn intensity<M: SkyModel>(model: &M, x: M::Real, y: M::Real) -> Result<M::Real, ModelError> {
    model.intensity_point(x, y)
}

/// Intensity of `model` on the pixel centres of `grid`.
pub fn intensitymap<M: SkyModel, E: FourierEngine<M::Real>>(
    model: &M,
    grid: &GridSpec<M::Real>,
    engine: &E,
) -> Result<Array2<M::Real>, ModelError> {
    model.intensitymap(grid, engine)
}

/// Fourier-domain samples of `model` on the centred frequencies of `grid`.
pub fn fouriermap<M: SkyModel, E: FourierEngine<M::Real>>(
    model: &M,
    grid: &GridSpec<M::Real>,
    engine: &E,
) -> Result<Array2<Complex<M::Real>>, ModelError> {
    model.fouriermap(grid, engine)
}

pub fn flux<M: SkyModel>(model: &M) -> M::Real {
    model.flux()
}

pub fn radial_extent<M: SkyModel>(model: &M) -> M::Real {
    model.radial_extent()
}

/// Leaves of `model` in left-to-right construction order.
pub fn components<M: SkyModel>(model: &M) -> Vec<&dyn Component> {
    model.components()
}

pub fn visibility_analyticity<M: SkyModel>(_model: &M) -> Analyticity {
    <M::Visibility as AnalyticAxis>::KIND
}

pub fn intensity_analyticity<M: SkyModel>(_model: &M) -> Analyticity {
    <M::Intensity as AnalyticAxis>::KIND
}

/// Render `model` on `grid` into an [`ImageModel`] that can stand in for it.
pub fn render<M: SkyModel, E: FourierEngine<M::Real>>(
    model: &M,
    grid: &GridSpec<M::Real>,
    engine: &E,
) -> Result<ImageModel<M::Real>, ModelError> {
    tracing::debug!(
        model = std::any::type_name::<M>(),
        nx = grid.nx(),
        ny = grid.ny(),
        "rendering model to image"
    );
    ImageModel::new(model.intensitymap(grid, engine)?, *grid)
}

pub(crate) fn check_lengths<T>(u: ArrayView1<T>, v: ArrayView1<T>) -> Result<(), ModelError> {
    if u.len() != v.len() {
        return Err(ModelError::shape("u and v coordinates", &[u.len()], &[v.len()]));
    }
    Ok(())
}

/// Pointwise visibilities at `(u[k], v[k])`.
pub(crate) fn sample_visibilities<M: SkyModel>(
    model: &M,
    u: ArrayView1<M::Real>,
    v: ArrayView1<M::Real>,
    executor: Executor,
) -> Result<Array1<Complex<M::Real>>, ModelError> {
    check_lengths(u, v)?;
    tracing::trace!(points = u.len(), ?executor, "pointwise visibilities");
    let values = executor.collect(u.len(), |k| model.visibility_point(u[k], v[k]))?;
    Ok(Array1::from_vec(values))
}

/// Pointwise visibilities on the centred frequencies of `grid`.
pub(crate) fn sample_fourier_grid<M: SkyModel>(
    model: &M,
    grid: &GridSpec<M::Real>,
    executor: Executor,
) -> Result<Array2<Complex<M::Real>>, ModelError> {
    let ny = grid.ny();
    tracing::trace!(points = grid.len(), ?executor, "pointwise Fourier grid");
    let values = executor.collect(grid.len(), |k| {
        model.visibility_point(grid.u(k / ny), grid.v(k % ny))
    })?;
    into_grid(grid, values)
}

/// Pointwise intensities on the pixel centres of `grid`.
pub(crate) fn sample_image_grid<M: SkyModel>(
    model: &M,
    grid: &GridSpec<M::Real>,
    executor: Executor,
) -> Result<Array2<M::Real>, ModelError> {
    let ny = grid.ny();
    tracing::trace!(points = grid.len(), ?executor, "pointwise image grid");
    let values = executor.collect(grid.len(), |k| {
        model.intensity_point(grid.x(k / ny), grid.y(k % ny))
    })?;
    into_grid(grid, values)
}

fn into_grid<A, T: crate::Real>(
    grid: &GridSpec<T>,
    values: Vec<A>,
) -> Result<Array2<A>, ModelError> {
    let len = values.len();
    Array2::from_shape_vec(grid.shape(), values)
        .map_err(|_| ModelError::shape("grid samples", &[grid.nx(), grid.ny()], &[len]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{stretched_gaussian, Gaussian, Point};
    use crate::{add, convolved, scale, AnalyticOnly};
    use approx::assert_relative_eq;
    use ndarray::Array1;

    #[test]
    fn fourier_grid_layout_matches_grid_spec() {
        let g = stretched_gaussian(0.8, 0.3).unwrap();
        let grid = GridSpec::new(6.0, 3.0, 6, 4).unwrap();
        let map = fouriermap(&g, &grid, &AnalyticOnly::default()).unwrap();
        assert_eq!(map.dim(), (6, 4));
        for i in 0..6 {
            for j in 0..4 {
                let expected = visibility(&g, grid.u(i), grid.v(j)).unwrap();
                assert_eq!(map[[i, j]], expected);
            }
        }
    }

    #[test]
    fn image_grid_layout_matches_grid_spec() {
        let g = stretched_gaussian(1.0, 0.5).unwrap();
        let grid = GridSpec::new(4.0, 6.0, 3, 5).unwrap();
        let image = intensitymap(&g, &grid, &AnalyticOnly::default()).unwrap();
        assert_eq!(image.dim(), (3, 5));
        assert_relative_eq!(image[[2, 1]], intensity(&g, grid.x(2), grid.y(1)).unwrap());
    }

    #[test]
    fn threaded_matches_serial() {
        let m = convolved(
            add(Gaussian::unit(), scale(Point::unit(), 0.5)),
            stretched_gaussian(0.2, 0.4).unwrap(),
        );
        let u = Array1::linspace(-1.0, 1.0, 257);
        let v = Array1::linspace(0.5, -0.5, 257);
        let serial = AnalyticOnly::new(Executor::Serial);
        let threaded = AnalyticOnly::new(Executor::Threaded);
        assert_eq!(
            visibilities(&m, u.view(), v.view(), &serial).unwrap(),
            visibilities(&m, u.view(), v.view(), &threaded).unwrap()
        );
    }

    #[test]
    fn reports_analyticity() {
        let m = add(Gaussian::unit(), Point::unit());
        assert_eq!(visibility_analyticity(&m), Analyticity::Analytic);
        assert_eq!(intensity_analyticity(&m), Analyticity::NotAnalytic);
        assert_eq!(intensity_analyticity(&Gaussian::unit()), Analyticity::Analytic);
    }

    #[test]
    fn flux_and_extent_entry_points() {
        let m = add(stretched_gaussian(2.0, 2.0).unwrap(), scale(Gaussian::unit(), 2.0));
        assert_relative_eq!(flux(&m), 3.0);
        assert_relative_eq!(radial_extent(&m), 10.0);
    }

    #[test]
    fn render_wraps_the_intensity_map() {
        let g = Gaussian::unit();
        let grid = GridSpec::square(12.0, 16).unwrap();
        let image = render(&g, &grid, &AnalyticOnly::default()).unwrap();
        assert_eq!(image.grid(), &grid);
        assert_relative_eq!(image.flux(), 1.0, epsilon = 1e-6);
    }
}
