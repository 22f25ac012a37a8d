//! Leaf models.
//!
//! These are the primitives the combinator algebra needs for itself: a
//! Gaussian kernel for [`smoothed`](crate::smoothed), a point source, and a
//! pre-rendered image used when a subtree is substituted by its grid. Further
//! primitives only need to implement [`SkyModel`](crate::SkyModel).

mod gaussian;
mod image;
mod point;

pub use gaussian::{stretched_gaussian, Gaussian};
pub use image::ImageModel;
pub use point::Point;
