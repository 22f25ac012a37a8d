#![allow(dead_code)]

use std::f64::consts::PI;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use vismodels::{Complex, Executor, FourierEngine, GridSpec, ModelError};

/// Direct (non-FFT) discrete Fourier transform on the `GridSpec` conventions.
///
/// Image values are intensities: the forward transform weights each pixel by
/// its area and the inverse divides by the field of view, so
/// `inverse(forward(image)) == image` to rounding.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectDft {
    pub executor: Executor,
}

fn phase(sign: f64, k: f64, x: f64) -> Complex<f64> {
    Complex::from_polar(1.0, sign * 2.0 * PI * k * x)
}

fn check_shape(grid: &GridSpec<f64>, shape: &[usize]) -> Result<(), ModelError> {
    if shape != [grid.nx(), grid.ny()] {
        return Err(ModelError::Engine(format!(
            "grid of shape {:?} does not match {}x{}",
            shape,
            grid.nx(),
            grid.ny()
        )));
    }
    Ok(())
}

impl FourierEngine<f64> for DirectDft {
    fn executor(&self) -> Executor {
        self.executor
    }

    fn forward(
        &self,
        image: ArrayView2<f64>,
        grid: &GridSpec<f64>,
    ) -> Result<Array2<Complex<f64>>, ModelError> {
        check_shape(grid, image.shape())?;
        let (nx, ny) = grid.shape();
        let area = grid.dx() * grid.dy();
        // Separable: transform along x first, then along y.
        let mut partial = Array2::<Complex<f64>>::zeros((nx, ny));
        for k in 0..nx {
            for j in 0..ny {
                partial[[k, j]] = (0..nx)
                    .map(|i| phase(-1.0, grid.u(k), grid.x(i)) * image[[i, j]])
                    .sum();
            }
        }
        let mut out = Array2::<Complex<f64>>::zeros((nx, ny));
        for k in 0..nx {
            for l in 0..ny {
                out[[k, l]] = (0..ny)
                    .map(|j| phase(-1.0, grid.v(l), grid.y(j)) * partial[[k, j]])
                    .sum::<Complex<f64>>()
                    * area;
            }
        }
        Ok(out)
    }

    fn inverse(
        &self,
        fourier: ArrayView2<Complex<f64>>,
        grid: &GridSpec<f64>,
    ) -> Result<Array2<f64>, ModelError> {
        check_shape(grid, fourier.shape())?;
        let (nx, ny) = grid.shape();
        let norm = 1.0 / (grid.fovx() * grid.fovy());
        let mut partial = Array2::<Complex<f64>>::zeros((nx, ny));
        for i in 0..nx {
            for l in 0..ny {
                partial[[i, l]] = (0..nx)
                    .map(|k| phase(1.0, grid.u(k), grid.x(i)) * fourier[[k, l]])
                    .sum();
            }
        }
        let mut out = Array2::<f64>::zeros((nx, ny));
        for i in 0..nx {
            for j in 0..ny {
                let value: Complex<f64> = (0..ny)
                    .map(|l| phase(1.0, grid.v(l), grid.y(j)) * partial[[i, l]])
                    .sum();
                out[[i, j]] = value.re * norm;
            }
        }
        Ok(out)
    }

    fn sample(
        &self,
        image: ArrayView2<f64>,
        grid: &GridSpec<f64>,
        u: ArrayView1<f64>,
        v: ArrayView1<f64>,
    ) -> Result<Array1<Complex<f64>>, ModelError> {
        check_shape(grid, image.shape())?;
        let area = grid.dx() * grid.dy();
        Ok(Array1::from_shape_fn(u.len(), |p| {
            let mut acc = Complex::new(0.0, 0.0);
            for ((i, j), value) in image.indexed_iter() {
                acc += phase(-1.0, u[p], grid.x(i)) * phase(-1.0, v[p], grid.y(j)) * *value;
            }
            acc * area
        }))
    }
}

pub fn assert_complex_close(got: Complex<f64>, expected: Complex<f64>, epsilon: f64) {
    assert!(
        (got - expected).norm() <= epsilon,
        "expected {expected}, got {got} (epsilon {epsilon})"
    );
}
