//! Ratings list loading for the template loading demo
//!
//! Reads a JSON array of numeric ratings, e.g. `[4.5, 3, 2.2]`, and turns
//! each entry into a read-only `RatingWidget`.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::rating::RatingWidget;

/// Read and parse a ratings file
pub async fn load_ratings(path: PathBuf) -> Result<Vec<f32>> {
    tracing::info!("Loading ratings from {}", path.display());
    let content = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    parse_ratings(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Parse a JSON array of ratings
pub fn parse_ratings(content: &str) -> Result<Vec<f32>> {
    let ratings: Vec<f32> = serde_json::from_str(content).context("expected a JSON array of numbers")?;
    Ok(ratings)
}

/// One read-only widget per loaded rating
pub fn build_widgets(ratings: &[f32]) -> Vec<RatingWidget> {
    ratings
        .iter()
        .map(|&rating| RatingWidget::new().with_rating(rating).read_only(true))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::StarKind;

    #[test]
    fn test_parse_ratings() {
        assert_eq!(parse_ratings("[4.5, 3, 0]").unwrap(), vec![4.5, 3.0, 0.0]);
        assert!(parse_ratings("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert!(parse_ratings(r#"["four"]"#).is_err());
        assert!(parse_ratings(r#"{"rating": 4}"#).is_err());
    }

    #[test]
    fn test_build_widgets() {
        let widgets = build_widgets(&[4.5, 1.0]);
        assert_eq!(widgets.len(), 2);
        assert!(widgets.iter().all(RatingWidget::is_read_only));
        assert_eq!(widgets[0].stars()[4], StarKind::Half);
        assert_eq!(widgets[1].rating(), 1.0);
    }

    #[tokio::test]
    async fn test_load_bundled_ratings() {
        let path = crate::features::DemoSettings::default().ratings_path();
        let ratings = load_ratings(path).await.unwrap();
        assert!(!ratings.is_empty());
        assert!(ratings.iter().all(|r| (0.0..=5.0).contains(r)));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_ratings(PathBuf::from("/nonexistent/stars.json"))
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("reading"));
    }
}
