//! Star categories and the rating-to-sequence mapping
//!
//! A rating is shown as five icons. Whole points become full stars, a
//! remainder of at least one half becomes a single half star, and the rest
//! stay blank. Ratings are effectively rounded down to the nearest half.

/// Number of star slots in every sequence
pub const STAR_COUNT: usize = 5;

/// Highest representable rating
pub const MAX_RATING: f32 = STAR_COUNT as f32;

/// Fractional remainder at which a blank slot is promoted to a half star
pub const HALF_STAR_THRESHOLD: f32 = 0.5;

/// Icon category for one star slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarKind {
    Full,
    Half,
    Blank,
}

impl StarKind {
    /// Icon key for this category, as used by the icon set
    pub fn icon_name(&self) -> &'static str {
        match self {
            StarKind::Full => "star",
            StarKind::Half => "half-star",
            StarKind::Blank => "blank-star",
        }
    }
}

/// Ordered, positionally indexed star slots
pub type StarSequence = [StarKind; STAR_COUNT];

/// Map a raw rating into `[0, MAX_RATING]`
///
/// NaN becomes 0 and infinities saturate at the bounds.
pub fn sanitize_rating(rating: f32) -> f32 {
    if rating.is_nan() {
        0.0
    } else {
        rating.clamp(0.0, MAX_RATING)
    }
}

/// Derive the star sequence for a rating
///
/// Pure and total: out-of-range input is clamped first, so a half star can
/// never be placed past the last slot.
pub fn compute_stars(rating: f32) -> StarSequence {
    let rating = sanitize_rating(rating);
    let whole = rating.floor();
    let fraction = rating - whole;
    let whole = whole as usize;

    let mut stars = [StarKind::Blank; STAR_COUNT];
    for star in stars.iter_mut().take(whole) {
        *star = StarKind::Full;
    }

    if fraction >= HALF_STAR_THRESHOLD && whole < STAR_COUNT {
        stars[whole] = StarKind::Half;
    }

    stars
}
