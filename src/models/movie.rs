use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub synopsis: Option<String>,
    pub duration_min: u32,
    pub rating: Option<String>,
    pub genre: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub synopsis: Option<String>,
    pub duration_min: u32,
    pub rating: Option<String>,
    pub genre: Option<String>,
}

impl NewMovie {
    pub fn validate(&self) -> ApiResult<()> {
        if self.duration_min < 1 {
            return Err(ApiError::bad_request("duration_min must be >= 1"));
        }
        Ok(())
    }
}

/// Partial update: only fields present in the request overwrite the record.
#[derive(Debug, Default, Deserialize)]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub synopsis: Option<String>,
    pub duration_min: Option<u32>,
    pub rating: Option<String>,
    pub genre: Option<String>,
}

impl MovieUpdate {
    pub fn validate(&self) -> ApiResult<()> {
        if matches!(self.duration_min, Some(0)) {
            return Err(ApiError::bad_request("duration_min must be >= 1"));
        }
        Ok(())
    }

    pub fn apply(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(synopsis) = self.synopsis {
            movie.synopsis = Some(synopsis);
        }
        if let Some(duration_min) = self.duration_min {
            movie.duration_min = duration_min;
        }
        if let Some(rating) = self.rating {
            movie.rating = Some(rating);
        }
        if let Some(genre) = self.genre {
            movie.genre = Some(genre);
        }
    }
}
