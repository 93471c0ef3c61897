use crate::core::distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box};
use crate::models::{AnnotatedPost, MatePost, PositionState};
use std::cmp::Ordering;
use tracing::debug;

/// Options controlling the proximity pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankOptions {
    /// Exclude posts whose known distance exceeds this, in kilometers
    pub max_distance_km: Option<f64>,
    /// Sort by distance ascending, unknown distances last
    pub sort_ascending: bool,
    /// With a max-distance cut active, also drop posts whose distance is
    /// unknown. Off by default: unknown posts are shown without a badge
    /// rather than hidden.
    pub exclude_unknown: bool,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            max_distance_km: None,
            sort_ascending: true,
            exclude_unknown: false,
        }
    }
}

/// Proximity annotation pipeline for mate posts
///
/// # Pipeline stages
/// 1. Reference availability check (degraded mode when loading/failed)
/// 2. Bounding box pre-filter when a max-distance cut is requested
/// 3. Haversine distance annotation + max-distance cut
/// 4. Stable ascending sort, unknown distances last
#[derive(Debug, Clone, Default)]
pub struct ProximityRanker {
    options: RankOptions,
}

impl ProximityRanker {
    pub fn new(options: RankOptions) -> Self {
        Self { options }
    }

    pub fn with_default_options() -> Self {
        Self::default()
    }

    /// Annotate each post with its distance from the reference position,
    /// apply the distance cut, and sort
    ///
    /// Degrades rather than fails: an unavailable reference position turns
    /// every distance into `None` and disables the distance cut entirely,
    /// and a post whose own position is missing or malformed is kept with
    /// an unknown distance (unless `exclude_unknown` opts out). No single
    /// bad position aborts the batch.
    pub fn annotate_and_filter(
        &self,
        posts: Vec<MatePost>,
        reference: &PositionState,
    ) -> Vec<AnnotatedPost> {
        let total = posts.len();

        let center = match reference.available() {
            Some(center) => center,
            None => {
                debug!(total, "reference position unavailable, distances degrade to unknown");
                let mut annotated: Vec<AnnotatedPost> = posts
                    .into_iter()
                    .map(|post| AnnotatedPost {
                        post,
                        distance_km: None,
                    })
                    .collect();
                if self.options.sort_ascending {
                    sort_by_distance(&mut annotated);
                }
                return annotated;
            }
        };

        // Stage 2: cheap pre-filter; outside the box is outside the circle.
        // A box that spills past ±180° cannot be compared without longitude
        // wrapping, so near the antimeridian the exact check runs alone.
        let bbox = self.options.max_distance_km.and_then(|radius| {
            let bbox = calculate_bounding_box(center, radius);
            (bbox.min_lng >= -180.0 && bbox.max_lng <= 180.0).then_some(bbox)
        });

        let mut annotated: Vec<AnnotatedPost> = posts
            .into_iter()
            .filter_map(|post| match post.available_position() {
                Some(position) => {
                    if let Some(bbox) = &bbox {
                        if !is_within_bounding_box(position, bbox) {
                            return None;
                        }
                    }

                    let distance_km = haversine_distance(center, position);
                    if let Some(max) = self.options.max_distance_km {
                        if distance_km > max {
                            return None;
                        }
                    }

                    Some(AnnotatedPost {
                        post,
                        distance_km: Some(distance_km),
                    })
                }
                None => {
                    if self.options.exclude_unknown && self.options.max_distance_km.is_some() {
                        None
                    } else {
                        Some(AnnotatedPost {
                            post,
                            distance_km: None,
                        })
                    }
                }
            })
            .collect();

        if self.options.sort_ascending {
            sort_by_distance(&mut annotated);
        }

        debug!(total, kept = annotated.len(), "annotated mate posts");
        annotated
    }
}

/// Stable ascending sort by distance, unknown distances last
///
/// `sort_by` is stable, so input order is preserved among equal and
/// unknown distances.
fn sort_by_distance(annotated: &mut [AnnotatedPost]) {
    annotated.sort_by(|a, b| match (a.distance_km, b.distance_km) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
