use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::{model::real, ModelError, Real};

/// Field of view and sampling of an image grid and its Fourier dual.
///
/// Pixel centres lie at `x_i = -fovx/2 + (i + 1/2) * fovx/nx` and the dual
/// frequencies are centred, `u_i = (i - nx/2) / fovx` (integer `nx/2`). Grids
/// built from this type are indexed `[i, j]` and have shape `(nx, ny)`.
///
/// Deserialisation goes through [`GridSpec::new`], so a configuration file
/// cannot produce an invalid grid:
///
/// ```ignore
/// let grid: GridSpec<f64> = serde_json::from_str(r#"{"fovx":10.0,"fovy":10.0,"nx":64,"ny":64}"#)?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawGrid<T>",
    bound(deserialize = "T: Real + Deserialize<'de>", serialize = "T: Serialize")
)]
pub struct GridSpec<T> {
    fovx: T,
    fovy: T,
    nx: usize,
    ny: usize,
}

#[derive(Deserialize)]
struct RawGrid<T> {
    fovx: T,
    fovy: T,
    nx: usize,
    ny: usize,
}

impl<T: Real> TryFrom<RawGrid<T>> for GridSpec<T> {
    type Error = ModelError;

    fn try_from(raw: RawGrid<T>) -> Result<Self, Self::Error> {
        GridSpec::new(raw.fovx, raw.fovy, raw.nx, raw.ny)
    }
}

impl<T: Real> GridSpec<T> {
    /// Create a grid covering `fovx × fovy` with `nx × ny` pixels.
    pub fn new(fovx: T, fovy: T, nx: usize, ny: usize) -> Result<Self, ModelError> {
        for (name, fov) in [("fovx", fovx), ("fovy", fovy)] {
            if !fov.is_finite() || fov <= T::zero() {
                return Err(ModelError::InvalidGrid {
                    reason: format!("{name} must be positive and finite, got {fov}"),
                });
            }
        }
        if nx == 0 || ny == 0 {
            return Err(ModelError::InvalidGrid {
                reason: format!("grid must have at least one pixel, got {nx}x{ny}"),
            });
        }
        if nx.checked_mul(ny).is_none() {
            return Err(ModelError::InvalidGrid {
                reason: format!("pixel count {nx}x{ny} overflows usize"),
            });
        }
        Ok(GridSpec { fovx, fovy, nx, ny })
    }

    /// Square grid with the same field of view and pixel count on both axes.
    pub fn square(fov: T, n: usize) -> Result<Self, ModelError> {
        Self::new(fov, fov, n, n)
    }

    pub fn fovx(&self) -> T {
        self.fovx
    }

    pub fn fovy(&self) -> T {
        self.fovy
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.nx * self.ny
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pixel width along x
    pub fn dx(&self) -> T {
        self.fovx / real(self.nx as f64)
    }

    /// Pixel width along y
    pub fn dy(&self) -> T {
        self.fovy / real(self.ny as f64)
    }

    pub fn x(&self, i: usize) -> T {
        pixel_center(self.fovx, self.nx, i)
    }

    pub fn y(&self, j: usize) -> T {
        pixel_center(self.fovy, self.ny, j)
    }

    pub fn u(&self, i: usize) -> T {
        frequency(self.fovx, self.nx, i)
    }

    pub fn v(&self, j: usize) -> T {
        frequency(self.fovy, self.ny, j)
    }

    /// Pixel centres along x and y
    pub fn pixel_centers(&self) -> (Array1<T>, Array1<T>) {
        (
            Array1::from_shape_fn(self.nx, |i| self.x(i)),
            Array1::from_shape_fn(self.ny, |j| self.y(j)),
        )
    }

    /// Centred spatial frequencies along u and v
    pub fn frequencies(&self) -> (Array1<T>, Array1<T>) {
        (
            Array1::from_shape_fn(self.nx, |i| self.u(i)),
            Array1::from_shape_fn(self.ny, |j| self.v(j)),
        )
    }
}

fn pixel_center<T: Real>(fov: T, n: usize, i: usize) -> T {
    let step = fov / real(n as f64);
    -fov / real(2.0) + step * real(i as f64 + 0.5)
}

fn frequency<T: Real>(fov: T, n: usize, i: usize) -> T {
    (real::<T>(i as f64) - real((n / 2) as f64)) / fov
}
