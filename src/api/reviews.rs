//! Review Submission Requests

use crate::models::ReviewPayload;
use super::{post_json, ApiError};

/// Path reviews for a college are posted to
pub fn college_path(college: &str) -> String {
    format!("/colleges/{}", college)
}

/// Store a review for a college. The response body is ignored.
pub async fn submit_review(url: &str, payload: &ReviewPayload) -> Result<(), ApiError> {
    post_json(url, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_college_path() {
        assert_eq!(college_path("trinity"), "/colleges/trinity");
        assert_eq!(college_path(""), "/colleges/");
    }
}
