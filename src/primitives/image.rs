use std::sync::Arc;

use nalgebra::Complex;
use ndarray::{Array1, Array2, ArrayView1};

use crate::evaluate::check_lengths;
use crate::fourier::{FourierEngine, GridSpec};
use crate::model::{real, Component, NotAnalytic, Real, SkyModel};
use crate::ModelError;

/// An intensity grid sampled on the pixel centres of a [`GridSpec`].
///
/// Neither axis is analytic: visibilities and Fourier grids are requested from
/// the engine, and the image is only available on its own grid. The pixel
/// data is shared, so cloning an image model is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageModel<T: Real = f64> {
    image: Arc<Array2<T>>,
    grid: GridSpec<T>,
}

impl<T: Real> ImageModel<T> {
    /// Wrap an intensity grid; its shape must be `(grid.nx(), grid.ny())`.
    pub fn new(image: Array2<T>, grid: GridSpec<T>) -> Result<Self, ModelError> {
        let expected = [grid.nx(), grid.ny()];
        if image.shape() != expected {
            return Err(ModelError::shape("image model", image.shape(), &expected));
        }
        Ok(ImageModel {
            image: Arc::new(image),
            grid,
        })
    }

    pub fn image(&self) -> &Array2<T> {
        &self.image
    }

    pub fn grid(&self) -> &GridSpec<T> {
        &self.grid
    }

    fn ensure_grid(&self, grid: &GridSpec<T>) -> Result<(), ModelError> {
        if grid.shape() != self.grid.shape() {
            let (nx, ny) = grid.shape();
            let (mx, my) = self.grid.shape();
            return Err(ModelError::shape("image model grid", &[nx, ny], &[mx, my]));
        }
        if grid != &self.grid {
            return Err(ModelError::InvalidGrid {
                reason: format!(
                    "requested field of view {}x{} differs from the image's {}x{}",
                    grid.fovx(),
                    grid.fovy(),
                    self.grid.fovx(),
                    self.grid.fovy()
                ),
            });
        }
        Ok(())
    }
}

impl<T: Real> SkyModel for ImageModel<T> {
    type Real = T;
    type Visibility = NotAnalytic;
    type Intensity = NotAnalytic;

    fn flux(&self) -> T {
        self.image.sum() * self.grid.dx() * self.grid.dy()
    }

    fn radial_extent(&self) -> T {
        self.grid.fovx().max(self.grid.fovy()) / real(2.0)
    }

    fn visibilities<E: FourierEngine<T>>(
        &self,
        u: ArrayView1<T>,
        v: ArrayView1<T>,
        engine: &E,
    ) -> Result<Array1<Complex<T>>, ModelError> {
        check_lengths(u, v)?;
        engine.sample(self.image.view(), &self.grid, u, v)
    }

    fn fouriermap<E: FourierEngine<T>>(
        &self,
        grid: &GridSpec<T>,
        engine: &E,
    ) -> Result<Array2<Complex<T>>, ModelError> {
        self.ensure_grid(grid)?;
        engine.forward(self.image.view(), grid)
    }

    fn intensitymap<E: FourierEngine<T>>(
        &self,
        grid: &GridSpec<T>,
        _engine: &E,
    ) -> Result<Array2<T>, ModelError> {
        self.ensure_grid(grid)?;
        Ok(self.image.as_ref().clone())
    }

    fn components(&self) -> Vec<&dyn Component> {
        vec![self as &dyn Component]
    }
}
