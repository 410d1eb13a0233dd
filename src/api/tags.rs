//! Tag Suggestion Requests

use crate::models::{GenerateTagsRequest, GenerateTagsResponse};
use super::{post_json, read_json, ApiError};

pub const GENERATE_TAGS_PATH: &str = "/generate_tags";

/// Ask the server for tags describing a review text
pub async fn generate_tags(url: &str, text: &str) -> Result<Vec<String>, ApiError> {
    let response = post_json(url, &GenerateTagsRequest { text }).await?;
    let body: GenerateTagsResponse = read_json(response).await?;
    Ok(body.tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_string(&GenerateTagsRequest { text: "late night food" }).unwrap();
        assert_eq!(body, r#"{"text":"late night food"}"#);
    }
}
