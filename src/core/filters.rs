use crate::models::{MateFilter, MatePost};

/// Check if a post matches every categorical filter constraint
///
/// Unset fields pass everything; pet constraints match if any pet on the
/// post qualifies. Distance is the ranker's concern, not handled here.
#[inline]
pub fn matches_filter(post: &MatePost, filter: &MateFilter) -> bool {
    matches_author(post, filter)
        && matches_walk_date(post, filter)
        && matches_region(post, filter)
        && matches_pets(post, filter)
}

/// Check the post author's gender and age bracket
#[inline]
pub fn matches_author(post: &MatePost, filter: &MateFilter) -> bool {
    if let Some(gender) = filter.gender {
        // A post with no author summary cannot satisfy an author constraint
        if post.author.as_ref().and_then(|a| a.gender) != Some(gender) {
            return false;
        }
    }

    if let Some(age) = filter.age {
        if post.author.as_ref().and_then(|a| a.age) != Some(age) {
            return false;
        }
    }

    true
}

/// Check the scheduled walk date
#[inline]
pub fn matches_walk_date(post: &MatePost, filter: &MateFilter) -> bool {
    match filter.date_time {
        Some(date) => post.walk_date() == Some(date),
        None => true,
    }
}

/// Check the region against the post's address text
///
/// Region names are an open set of district strings, so this is a substring
/// match the way the listing search behaves.
#[inline]
pub fn matches_region(post: &MatePost, filter: &MateFilter) -> bool {
    match filter.regions.as_deref() {
        Some(region) => post
            .address
            .as_deref()
            .map(|addr| addr.contains(region))
            .unwrap_or(false),
        None => true,
    }
}

/// Check the pet constraints (sex, weight bracket)
#[inline]
pub fn matches_pets(post: &MatePost, filter: &MateFilter) -> bool {
    if let Some(sex) = filter.male_female {
        if !post.pets.iter().any(|pet| pet.male_female == sex) {
            return false;
        }
    }

    if let Some(band) = filter.weight {
        let any_in_band = post
            .pets
            .iter()
            .any(|pet| pet.weight.map(|w| band.contains(w)).unwrap_or(false));
        if !any_in_band {
            return false;
        }
    }

    true
}
