//! SVG star icon set
//!
//! All icons share a 24x24 view box so they can be stacked. The half star
//! only covers the left half of the outline and is drawn over a blank star.
//! Colors come from the svg style at render time.

use crate::rating::StarKind;

/// Filled star
pub const STAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z"/></svg>"#;

/// Blank star, same outline as `STAR`
pub const BLANK_STAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M12 17.27L18.18 21l-1.64-7.03L22 9.24l-7.19-.61L12 2 9.19 8.63 2 9.24l5.46 4.73L5.82 21z"/></svg>"#;

/// Left half of a star
pub const HALF_STAR: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M 12,17.27 12,2 9.19,8.63 2,9.24 7.46,13.97 5.82,21 Z"/></svg>"#;

/// Foreground icon for a star category
pub fn icon_for(kind: StarKind) -> &'static str {
    match kind {
        StarKind::Full => STAR,
        StarKind::Half => HALF_STAR,
        StarKind::Blank => BLANK_STAR,
    }
}
