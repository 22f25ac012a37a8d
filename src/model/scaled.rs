use nalgebra::Complex;
use ndarray::{Array1, Array2, ArrayView1};

use crate::fourier::{FourierEngine, GridSpec};
use crate::model::{Component, SkyModel};
use crate::ModelError;

/// A model with its brightness multiplied by a constant factor.
///
/// Both axes of analyticity are inherited from the wrapped model. A scaled
/// model is a leaf for [`SkyModel::components`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaled<M: SkyModel> {
    model: M,
    factor: M::Real,
}

/// Multiply the brightness of `model` by `factor`; negative factors are allowed.
pub fn scale<M: SkyModel>(model: M, factor: M::Real) -> Scaled<M> {
    Scaled { model, factor }
}

impl<M: SkyModel> Scaled<M> {
    pub fn inner(&self) -> &M {
        &self.model
    }

    pub fn factor(&self) -> M::Real {
        self.factor
    }
}

impl<M: SkyModel> SkyModel for Scaled<M> {
    type Real = M::Real;
    type Visibility = M::Visibility;
    type Intensity = M::Intensity;

    fn flux(&self) -> Self::Real {
        self.model.flux() * self.factor
    }

    fn radial_extent(&self) -> Self::Real {
        self.model.radial_extent()
    }

    fn visibility_point(
        &self,
        u: Self::Real,
        v: Self::Real,
    ) -> Result<Complex<Self::Real>, ModelError> {
        Ok(self.model.visibility_point(u, v)? * self.factor)
    }

    fn intensity_point(&self, x: Self::Real, y: Self::Real) -> Result<Self::Real, ModelError> {
        Ok(self.model.intensity_point(x, y)? * self.factor)
    }

    fn visibilities<E: FourierEngine<Self::Real>>(
        &self,
        u: ArrayView1<Self::Real>,
        v: ArrayView1<Self::Real>,
        engine: &E,
    ) -> Result<Array1<Complex<Self::Real>>, ModelError> {
        let factor = self.factor;
        Ok(self.model.visibilities(u, v, engine)?.mapv(|z| z * factor))
    }

    fn fouriermap<E: FourierEngine<Self::Real>>(
        &self,
        grid: &GridSpec<Self::Real>,
        engine: &E,
    ) -> Result<Array2<Complex<Self::Real>>, ModelError> {
        let factor = self.factor;
        Ok(self.model.fouriermap(grid, engine)?.mapv(|z| z * factor))
    }

    fn intensitymap<E: FourierEngine<Self::Real>>(
        &self,
        grid: &GridSpec<Self::Real>,
        engine: &E,
    ) -> Result<Array2<Self::Real>, ModelError> {
        let factor = self.factor;
        Ok(self.model.intensitymap(grid, engine)?.mapv(|i| i * factor))
    }

    fn components(&self) -> Vec<&dyn Component> {
        vec![self as &dyn Component]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Gaussian, Point};
    use crate::AnalyticOnly;
    use approx::assert_relative_eq;

    #[test]
    fn scales_every_quantity() {
        let g = Gaussian::unit();
        let s = scale(g, -2.5);
        assert_relative_eq!(s.flux(), -2.5);
        assert_relative_eq!(s.radial_extent(), g.radial_extent());
        assert_relative_eq!(
            s.visibility_point(0.1, 0.2).unwrap().re,
            -2.5 * g.visibility_point(0.1, 0.2).unwrap().re
        );
        assert_relative_eq!(
            s.intensity_point(0.1, 0.2).unwrap(),
            -2.5 * g.intensity_point(0.1, 0.2).unwrap()
        );
    }

    #[test]
    fn grids_are_scaled() {
        let grid = GridSpec::square(10.0, 8).unwrap();
        let g = Gaussian::unit();
        let image = scale(g, 3.0).intensitymap(&grid, &AnalyticOnly::default()).unwrap();
        let reference = g.intensitymap(&grid, &AnalyticOnly::default()).unwrap();
        assert_relative_eq!(image[[4, 4]], 3.0 * reference[[4, 4]]);
    }

    #[test]
    fn is_a_single_leaf() {
        let s = scale(Point::unit(), 2.0);
        let leaves = s.components();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].downcast_ref::<Scaled<Point>>(), Some(&s));
    }
}
