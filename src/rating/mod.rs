//! Ratings and grades.
//!
//! - `RatingModel`: Pure attributes-to-rating function with its weights
//! - `GradeScale`: Rating-to-tier thresholds
//! - `Grade`: Ordered tier label

pub mod grade;
pub mod model;

pub use grade::{Grade, GradeScale, GradeThreshold};
pub use model::{
    CategoryFactors, MobilityFactors, NormalizationBounds, RatingModel, RatingWeights, MAX_RATING,
};
