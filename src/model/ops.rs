//! Operator sugar over [`add`], [`subtract`] and [`scale`].
//!
//! `a + b` is `add(a, b)`, `a - b` is `subtract(a, b)` and `-a` is `scale(a, -1)`.

use std::ops::{Add, Neg, Sub};

use crate::model::{add, real, scale, subtract, Composite, Real, Scaled, SkyModel, Sum};
use crate::primitives::{Gaussian, ImageModel, Point};

macro_rules! impl_model_ops {
    ([$($generics:tt)*] $model:ty) => {
        impl<$($generics)*, Rhs> Add<Rhs> for $model
        where
            $model: SkyModel,
            Rhs: SkyModel<Real = <$model as SkyModel>::Real>,
        {
            type Output = Sum<$model, Rhs>;

            fn add(self, rhs: Rhs) -> Self::Output {
                add(self, rhs)
            }
        }

        impl<$($generics)*, Rhs> Sub<Rhs> for $model
        where
            $model: SkyModel,
            Rhs: SkyModel<Real = <$model as SkyModel>::Real>,
        {
            type Output = Sum<$model, Scaled<Rhs>>;

            fn sub(self, rhs: Rhs) -> Self::Output {
                subtract(self, rhs)
            }
        }

        impl<$($generics)*> Neg for $model
        where
            $model: SkyModel,
        {
            type Output = Scaled<$model>;

            fn neg(self) -> Self::Output {
                scale(self, real(-1.0))
            }
        }
    };
}

impl_model_ops!([T: Real] Gaussian<T>);
impl_model_ops!([T: Real] Point<T>);
impl_model_ops!([T: Real] ImageModel<T>);
impl_model_ops!([M: SkyModel] Scaled<M>);
impl_model_ops!([L, R, C] Composite<L, R, C>);
