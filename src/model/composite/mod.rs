//! Binary composite nodes.
//!
//! A [`Composite`] owns two sub-models and a zero-sized [`Combinator`] type
//! that fixes how the node combines them: one rule for the Fourier domain, an
//! optional one for the image domain, and the propagation of analyticity. The
//! two combinators shipped with the crate are [`SumRule`] and
//! [`ConvolutionRule`]; the set is sealed.
//!
//! Nodes are generic over both children, so a tree such as
//! `Sum<Convolution<Gaussian, Point>, ImageModel>` is a single concrete type
//! and every dispatch decision below is resolved at compile time. The price is
//! one monomorphised copy of the evaluation code per distinct tree shape.
//!
//! Evaluation at a node, for each axis independently:
//!
//! | axis       | analytic                        | not analytic                                |
//! |------------|---------------------------------|---------------------------------------------|
//! | visibility | pointwise, with the uv rule     | batches only, children combined elementwise |
//! | intensity  | pointwise, with the xy rule     | grids only: child images added (Sum), or    |
//! |            |                                 | the combined Fourier grid inverse-          |
//! |            |                                 | transformed (Convolution)                   |

mod convolution;
mod sum;

pub use convolution::{convolved, smoothed, Convolution, ConvolutionRule};
pub use sum::{add, subtract, Sum, SumRule};

use std::fmt::Debug;
use std::marker::PhantomData;

use nalgebra::Complex;
use ndarray::{Array, Array1, Array2, ArrayView1, Dimension, Zip};

use crate::evaluate::{check_lengths, render, sample_image_grid, sample_visibilities};
use crate::fourier::{FourierEngine, GridSpec};
use crate::model::{AnalyticAxis, Both, Component, Real, SkyModel};
use crate::primitives::ImageModel;
use crate::ModelError;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// The pair of combination rules and the analyticity propagation of a composite variant.
pub trait Combinator:
    sealed::Sealed + Copy + Debug + Default + PartialEq + Eq + Send + Sync + 'static
{
    /// Operator symbol, used in logs
    const SYMBOL: &'static str;

    /// Intensity-axis analyticity of a node with children on axes `L` and `R`
    type Intensity<L: AnalyticAxis, R: AnalyticAxis>: AnalyticAxis;

    /// Fourier-domain combination
    fn uv<T: Real>(left: Complex<T>, right: Complex<T>) -> Complex<T>;

    /// Image-domain combination, if the variant has a pointwise one
    fn xy<T: Real>() -> Option<fn(T, T) -> T>;

    fn flux<T: Real>(left: T, right: T) -> T;

    fn radial_extent<T: Real>(left: T, right: T) -> T;
}

/// Binary node over two owned sub-models, combined according to `C`.
///
/// Nodes are immutable. The `with_*` and `render_*` methods build a new node
/// around a replacement child and a clone of the untouched sibling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Composite<L, R, C> {
    left: L,
    right: R,
    rule: PhantomData<C>,
}

impl<L, R, C> Composite<L, R, C> {
    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R, C> Composite<L, R, C>
where
    L: SkyModel,
    R: SkyModel<Real = L::Real>,
    C: Combinator,
{
    /// Combine `left` and `right` with the rules of `C`.
    ///
    /// Both children must share a scalar type; mixing precisions does not compile.
    pub fn new(left: L, right: R) -> Self {
        Composite {
            left,
            right,
            rule: PhantomData,
        }
    }

    /// The Fourier-domain combination rule of this variant.
    pub fn uv_combinator(&self) -> fn(Complex<L::Real>, Complex<L::Real>) -> Complex<L::Real> {
        C::uv::<L::Real>
    }

    /// The image-domain combination rule, `None` when the variant has no pointwise one.
    pub fn xy_combinator(&self) -> Option<fn(L::Real, L::Real) -> L::Real> {
        C::xy::<L::Real>()
    }

    /// New node with `left` replaced and the right child shared by value.
    pub fn with_left<M>(&self, left: M) -> Composite<M, R, C>
    where
        M: SkyModel<Real = L::Real>,
    {
        Composite::new(left, self.right.clone())
    }

    /// New node with `right` replaced and the left child shared by value.
    pub fn with_right<M>(&self, right: M) -> Composite<L, M, C>
    where
        M: SkyModel<Real = L::Real>,
    {
        Composite::new(self.left.clone(), right)
    }

    /// New node whose left child is replaced by its pre-rendered image on `grid`.
    pub fn render_left<E: FourierEngine<L::Real>>(
        &self,
        grid: &GridSpec<L::Real>,
        engine: &E,
    ) -> Result<Composite<ImageModel<L::Real>, R, C>, ModelError> {
        tracing::debug!(rule = C::SYMBOL, "substituting rendered left subtree");
        Ok(self.with_left(render(&self.left, grid, engine)?))
    }

    /// New node whose right child is replaced by its pre-rendered image on `grid`.
    pub fn render_right<E: FourierEngine<L::Real>>(
        &self,
        grid: &GridSpec<L::Real>,
        engine: &E,
    ) -> Result<Composite<L, ImageModel<L::Real>, C>, ModelError> {
        tracing::debug!(rule = C::SYMBOL, "substituting rendered right subtree");
        Ok(self.with_right(render(&self.right, grid, engine)?))
    }
}

impl<L, R, C> SkyModel for Composite<L, R, C>
where
    L: SkyModel,
    R: SkyModel<Real = L::Real>,
    C: Combinator,
{
    type Real = L::Real;
    type Visibility = Both<L::Visibility, R::Visibility>;
    type Intensity = C::Intensity<L::Intensity, R::Intensity>;

    fn flux(&self) -> Self::Real {
        C::flux(self.left.flux(), self.right.flux())
    }

    fn radial_extent(&self) -> Self::Real {
        C::radial_extent(self.left.radial_extent(), self.right.radial_extent())
    }

    fn visibility_point(
        &self,
        u: Self::Real,
        v: Self::Real,
    ) -> Result<Complex<Self::Real>, ModelError> {
        if !<Self::Visibility as AnalyticAxis>::IS_ANALYTIC {
            return Err(ModelError::missing::<Self>(
                "pointwise visibility of a non-analytic composite",
            ));
        }
        Ok(C::uv(
            self.left.visibility_point(u, v)?,
            self.right.visibility_point(u, v)?,
        ))
    }

    fn intensity_point(&self, x: Self::Real, y: Self::Real) -> Result<Self::Real, ModelError> {
        match C::xy::<Self::Real>() {
            Some(combine) if <Self::Intensity as AnalyticAxis>::IS_ANALYTIC => Ok(combine(
                self.left.intensity_point(x, y)?,
                self.right.intensity_point(x, y)?,
            )),
            _ => Err(ModelError::missing::<Self>(
                "pointwise intensity of a non-analytic composite",
            )),
        }
    }

    fn visibilities<E: FourierEngine<Self::Real>>(
        &self,
        u: ArrayView1<Self::Real>,
        v: ArrayView1<Self::Real>,
        engine: &E,
    ) -> Result<Array1<Complex<Self::Real>>, ModelError> {
        check_lengths(u, v)?;
        if <Self::Visibility as AnalyticAxis>::IS_ANALYTIC {
            return sample_visibilities(self, u, v, engine.executor());
        }
        tracing::debug!(
            rule = C::SYMBOL,
            points = u.len(),
            "combining child visibility batches"
        );
        let left = self.left.visibilities(u, v, engine)?;
        let right = self.right.visibilities(u, v, engine)?;
        zip_with("child visibilities", &left, &right, C::uv::<Self::Real>)
    }

    fn fouriermap<E: FourierEngine<Self::Real>>(
        &self,
        grid: &GridSpec<Self::Real>,
        engine: &E,
    ) -> Result<Array2<Complex<Self::Real>>, ModelError> {
        let left = self.left.fouriermap(grid, engine)?;
        let right = self.right.fouriermap(grid, engine)?;
        zip_with("child Fourier grids", &left, &right, C::uv::<Self::Real>)
    }

    fn intensitymap<E: FourierEngine<Self::Real>>(
        &self,
        grid: &GridSpec<Self::Real>,
        engine: &E,
    ) -> Result<Array2<Self::Real>, ModelError> {
        if <Self::Intensity as AnalyticAxis>::IS_ANALYTIC {
            return sample_image_grid(self, grid, engine.executor());
        }
        match C::xy::<Self::Real>() {
            Some(combine) => {
                let left = self.left.intensitymap(grid, engine)?;
                let right = self.right.intensitymap(grid, engine)?;
                zip_with("child intensity grids", &left, &right, combine)
            }
            None => {
                tracing::debug!(
                    rule = C::SYMBOL,
                    nx = grid.nx(),
                    ny = grid.ny(),
                    "inverse-transforming combined Fourier grid"
                );
                let fourier = self.fouriermap(grid, engine)?;
                engine.inverse(fourier.view(), grid)
            }
        }
    }

    fn components(&self) -> Vec<&dyn Component> {
        let mut leaves = self.left.components();
        leaves.extend(self.right.components());
        leaves
    }
}

/// Elementwise combination of two equal-shaped arrays.
fn zip_with<A, O, D, F>(
    context: &'static str,
    left: &Array<A, D>,
    right: &Array<A, D>,
    combine: F,
) -> Result<Array<O, D>, ModelError>
where
    A: Copy,
    D: Dimension,
    F: Fn(A, A) -> O,
{
    if left.shape() != right.shape() {
        return Err(ModelError::shape(context, left.shape(), right.shape()));
    }
    Ok(Zip::from(left)
        .and(right)
        .map_collect(|&l, &r| combine(l, r)))
}
