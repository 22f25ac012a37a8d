//! Type-level analyticity of a model along one evaluation axis.
//!
//! Each [`SkyModel`](crate::SkyModel) carries two associated types, one for the
//! visibility axis and one for the intensity axis. Both are one of the two
//! zero-sized markers defined here, so the dispatcher resolves the evaluation
//! strategy from the model's type alone:
//!
//! ```ignore
//! use vismodels::prelude::*;
//!
//! type V = <Sum<Gaussian, Point> as SkyModel>::Visibility;
//! assert!(<V as AnalyticAxis>::IS_ANALYTIC);
//!
//! type I = <Convolution<Gaussian, Gaussian> as SkyModel>::Intensity;
//! assert!(!<I as AnalyticAxis>::IS_ANALYTIC);
//! ```

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

mod sealed {
    pub trait Sealed {}
}

/// Value-level tag of an axis, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Analyticity {
    Analytic = 0,
    NotAnalytic = 1,
}

impl Analyticity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Analytic => "Analyticity::Analytic",
            Self::NotAnalytic => "Analyticity::NotAnalytic",
        }
    }

    pub fn is_analytic(&self) -> bool {
        matches!(self, Self::Analytic)
    }
}

/// Sealed marker trait implemented only by [`IsAnalytic`] and [`NotAnalytic`].
pub trait AnalyticAxis:
    sealed::Sealed + Copy + Debug + Default + PartialEq + Send + Sync + 'static
{
    /// Whether a closed-form pointwise formula exists on this axis
    const IS_ANALYTIC: bool;
    const KIND: Analyticity;

    /// Conjunction: analytic only if both `Self` and `Rhs` are
    type And<Rhs: AnalyticAxis>: AnalyticAxis;
}

/// The axis admits a closed-form pointwise formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsAnalytic;

/// The axis requires numerical grid evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotAnalytic;

impl sealed::Sealed for IsAnalytic {}
impl sealed::Sealed for NotAnalytic {}

impl AnalyticAxis for IsAnalytic {
    const IS_ANALYTIC: bool = true;
    const KIND: Analyticity = Analyticity::Analytic;
    type And<Rhs: AnalyticAxis> = Rhs;
}

impl AnalyticAxis for NotAnalytic {
    const IS_ANALYTIC: bool = false;
    const KIND: Analyticity = Analyticity::NotAnalytic;
    type And<Rhs: AnalyticAxis> = NotAnalytic;
}

/// Shorthand for the conjunction of two axes.
pub type Both<A, B> = <A as AnalyticAxis>::And<B>;

#[cfg(test)]
mod tests {
    use super::*;

    fn kind<A: AnalyticAxis>() -> Analyticity {
        A::KIND
    }

    #[test]
    fn conjunction_truth_table() {
        assert_eq!(kind::<Both<IsAnalytic, IsAnalytic>>(), Analyticity::Analytic);
        assert_eq!(kind::<Both<IsAnalytic, NotAnalytic>>(), Analyticity::NotAnalytic);
        assert_eq!(kind::<Both<NotAnalytic, IsAnalytic>>(), Analyticity::NotAnalytic);
        assert_eq!(kind::<Both<NotAnalytic, NotAnalytic>>(), Analyticity::NotAnalytic);
    }

    #[test]
    fn nested_conjunction() {
        type Deep = Both<IsAnalytic, Both<IsAnalytic, Both<IsAnalytic, NotAnalytic>>>;
        assert!(!<Deep as AnalyticAxis>::IS_ANALYTIC);
    }

    #[test]
    fn kind_strings() {
        assert_eq!(Analyticity::Analytic.to_str(), "Analyticity::Analytic");
        assert!(!Analyticity::NotAnalytic.is_analytic());
    }
}
