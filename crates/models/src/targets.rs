//! Polymorphic references.
//!
//! Reviews, watch history rows and watchlist rows each point at exactly one
//! of two tables. Storage keeps two nullable FK columns; code works with
//! these tagged unions and converts at the edges.
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Pick the single populated id, or fail naming both fields.
fn exactly_one(a: Option<i32>, b: Option<i32>, a_name: &str, b_name: &str) -> Result<Either, ModelError> {
    match (a, b) {
        (Some(a), None) => Ok(Either::Left(a)),
        (None, Some(b)) => Ok(Either::Right(b)),
        (None, None) => Err(ModelError::Validation(format!("one of {a_name} or {b_name} is required"))),
        (Some(_), Some(_)) => Err(ModelError::Validation(format!("only one of {a_name} or {b_name} may be set"))),
    }
}

enum Either {
    Left(i32),
    Right(i32),
}

/// What a review is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewTarget {
    Movie(i32),
    Series(i32),
}

impl ReviewTarget {
    pub fn from_ids(movie_id: Option<i32>, series_id: Option<i32>) -> Result<Self, ModelError> {
        Ok(match exactly_one(movie_id, series_id, "movieId", "seriesId")? {
            Either::Left(id) => Self::Movie(id),
            Either::Right(id) => Self::Series(id),
        })
    }

    pub fn movie_id(&self) -> Option<i32> {
        match self { Self::Movie(id) => Some(*id), Self::Series(_) => None }
    }

    pub fn series_id(&self) -> Option<i32> {
        match self { Self::Series(id) => Some(*id), Self::Movie(_) => None }
    }
}

/// What a watch history row records: a movie or a single episode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatchTarget {
    Movie(i32),
    Episode(i32),
}

impl WatchTarget {
    pub fn from_ids(movie_id: Option<i32>, episode_id: Option<i32>) -> Result<Self, ModelError> {
        Ok(match exactly_one(movie_id, episode_id, "movieId", "episodeId")? {
            Either::Left(id) => Self::Movie(id),
            Either::Right(id) => Self::Episode(id),
        })
    }

    pub fn movie_id(&self) -> Option<i32> {
        match self { Self::Movie(id) => Some(*id), Self::Episode(_) => None }
    }

    pub fn episode_id(&self) -> Option<i32> {
        match self { Self::Episode(id) => Some(*id), Self::Movie(_) => None }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatchlistTarget {
    Movie(i32),
    Series(i32),
}

impl WatchlistTarget {
    pub fn from_ids(movie_id: Option<i32>, series_id: Option<i32>) -> Result<Self, ModelError> {
        Ok(match exactly_one(movie_id, series_id, "movieId", "seriesId")? {
            Either::Left(id) => Self::Movie(id),
            Either::Right(id) => Self::Series(id),
        })
    }

    pub fn movie_id(&self) -> Option<i32> {
        match self { Self::Movie(id) => Some(*id), Self::Series(_) => None }
    }

    pub fn series_id(&self) -> Option<i32> {
        match self { Self::Series(id) => Some(*id), Self::Movie(_) => None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_target_requires_exactly_one() {
        assert_eq!(ReviewTarget::from_ids(Some(3), None).unwrap(), ReviewTarget::Movie(3));
        assert_eq!(ReviewTarget::from_ids(None, Some(7)).unwrap(), ReviewTarget::Series(7));
        assert!(matches!(ReviewTarget::from_ids(None, None), Err(ModelError::Validation(_))));
        assert!(matches!(ReviewTarget::from_ids(Some(1), Some(2)), Err(ModelError::Validation(_))));
    }

    #[test]
    fn watch_target_splits_back_into_columns() {
        let t = WatchTarget::from_ids(None, Some(42)).unwrap();
        assert_eq!(t.movie_id(), None);
        assert_eq!(t.episode_id(), Some(42));
        let err = WatchTarget::from_ids(None, None).unwrap_err();
        assert!(err.to_string().contains("episodeId"));
    }

    #[test]
    fn watchlist_target_accessors() {
        let t = WatchlistTarget::Movie(5);
        assert_eq!(t.movie_id(), Some(5));
        assert_eq!(t.series_id(), None);
        assert!(WatchlistTarget::from_ids(Some(5), Some(6)).is_err());
    }
}
