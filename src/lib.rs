//! Composable sky brightness models and their interferometric visibilities.
//!
//! Models are combined into trees with [`add`] / `+`, [`subtract`] / `-`,
//! [`convolved`] and [`smoothed`]. Every model carries, in its type, whether
//! its visibility and its intensity have closed forms; the evaluation
//! functions in [`evaluate`] use that to choose, at each node of the tree,
//! between pointwise evaluation and the numerical path through a
//! [`FourierEngine`].
//!
//! ```ignore
//! use vismodels::prelude::*;
//!
//! let core = stretched_gaussian(0.5, 0.5)?;
//! let model = smoothed(core + scale(Point::unit(), 2.0), 0.25)?;
//!
//! assert_eq!(flux(&model), 3.0);
//! let v = visibility(&model, 0.1, -0.3)?;
//! ```

pub mod error;
pub mod evaluate;
pub mod fourier;
pub mod model;
pub mod primitives;

pub use error::ModelError;
pub use evaluate::{
    components, flux, fouriermap, intensity, intensity_analyticity, intensitymap, radial_extent,
    render, visibilities, visibility, visibility_analyticity,
};
pub use fourier::{AnalyticOnly, Executor, FourierEngine, GridSpec};
pub use model::{
    add, convolved, scale, smoothed, subtract, AnalyticAxis, Analyticity, Both, Combinator,
    Component, Composite, Convolution, ConvolutionRule, IsAnalytic, NotAnalytic, Real, Scaled,
    SkyModel, Sum, SumRule,
};
pub use primitives::{stretched_gaussian, Gaussian, ImageModel, Point};

pub use nalgebra::Complex;

pub mod prelude {
    pub mod models {
        pub use crate::primitives::{stretched_gaussian, Gaussian, ImageModel, Point};
    }
    pub mod combinators {
        pub use crate::model::{
            add, convolved, scale, smoothed, subtract, Combinator, Composite, Convolution,
            ConvolutionRule, Scaled, Sum, SumRule,
        };
    }

    pub use crate::evaluate::*;
    pub use crate::fourier::{AnalyticOnly, Executor, FourierEngine, GridSpec};
    pub use crate::model::{
        add, convolved, scale, smoothed, subtract, AnalyticAxis, Analyticity, Component,
        Convolution, IsAnalytic, NotAnalytic, Real, Scaled, SkyModel, Sum,
    };
    pub use crate::primitives::{stretched_gaussian, Gaussian, ImageModel, Point};
    pub use crate::ModelError;
    pub use nalgebra::Complex;
}
