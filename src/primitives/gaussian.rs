use nalgebra::Complex;
use serde::{Deserialize, Serialize};

use crate::model::{real, Component, IsAnalytic, Real, SkyModel};
use crate::ModelError;

/// Zero-centred, unit-flux elliptical Gaussian.
///
/// ```text
/// I(x, y) = exp(-(x²/2σx² + y²/2σy²)) / (2π σx σy)
/// V(u, v) = exp(-2π² (σx² u² + σy² v²))
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gaussian<T = f64> {
    sigma_x: T,
    sigma_y: T,
}

impl Gaussian<f64> {
    /// Standard circular Gaussian with `σ = 1`.
    pub fn unit() -> Self {
        Gaussian {
            sigma_x: 1.0,
            sigma_y: 1.0,
        }
    }
}

impl<T: Real> Default for Gaussian<T> {
    fn default() -> Self {
        Gaussian {
            sigma_x: T::one(),
            sigma_y: T::one(),
        }
    }
}

impl<T: Real> Gaussian<T> {
    pub fn sigma_x(&self) -> T {
        self.sigma_x
    }

    pub fn sigma_y(&self) -> T {
        self.sigma_y
    }
}

/// Unit Gaussian stretched to standard deviations `sigma_x` and `sigma_y`.
pub fn stretched_gaussian<T: Real>(sigma_x: T, sigma_y: T) -> Result<Gaussian<T>, ModelError> {
    for (param, sigma) in [("sigma_x", sigma_x), ("sigma_y", sigma_y)] {
        if !sigma.is_finite() || sigma <= T::zero() {
            return Err(ModelError::InvalidParameter {
                param: param.to_string(),
                value: sigma.to_string(),
            });
        }
    }
    Ok(Gaussian { sigma_x, sigma_y })
}

impl<T: Real> SkyModel for Gaussian<T> {
    type Real = T;
    type Visibility = IsAnalytic;
    type Intensity = IsAnalytic;

    fn flux(&self) -> T {
        T::one()
    }

    fn radial_extent(&self) -> T {
        real::<T>(5.0) * self.sigma_x.max(self.sigma_y)
    }

    #[inline(always)]
    fn visibility_point(&self, u: T, v: T) -> Result<Complex<T>, ModelError> {
        let su = self.sigma_x * u;
        let sv = self.sigma_y * v;
        let amplitude = (-real::<T>(2.0) * T::pi() * T::pi() * (su * su + sv * sv)).exp();
        Ok(Complex::new(amplitude, T::zero()))
    }

    #[inline(always)]
    fn intensity_point(&self, x: T, y: T) -> Result<T, ModelError> {
        let zx = x / self.sigma_x;
        let zy = y / self.sigma_y;
        let norm = T::two_pi() * self.sigma_x * self.sigma_y;
        Ok((-(zx * zx + zy * zy) / real(2.0)).exp() / norm)
    }

    fn components(&self) -> Vec<&dyn Component> {
        vec![self as &dyn Component]
    }
}
