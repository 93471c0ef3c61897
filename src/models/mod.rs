// Model exports
pub mod domain;
pub mod filter;

pub use domain::{
    AnnotatedPost, BoundingBox, GeoError, GeoPoint, MateAuthor, MatePet, MatePost, PositionState,
};
pub use filter::{AgeBand, FilterUpdate, Gender, MateFilter, PetSex, WeightBand};
