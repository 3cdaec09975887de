use serde::{Deserialize, Serialize};

use crate::posts::repo_types::Post;

/// Body for create and update.
#[derive(Debug, Default, Deserialize)]
pub struct PostBodyRequest {
    #[serde(default)]
    pub body: Option<String>,
}

impl PostBodyRequest {
    /// The body text, unless it is missing or only whitespace.
    pub fn required_body(self) -> Option<String> {
        self.body.filter(|b| !b.trim().is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct DeletedPostResponse {
    pub message: &'static str,
    pub post: Post,
}

#[derive(Debug, Serialize)]
pub struct DeletedAllResponse {
    pub message: &'static str,
    pub deleted: u64,
}
