use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostError {
    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),
    #[error("Invalid direction: {0}")]
    InvalidDirection(String),
    #[error("Invalid JSON or empty body")]
    EmptyBody,
    #[error("Missing or empty fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Post with id {0} was not found.")]
    NotFound(u64),
}

impl PostError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_format() {
        assert_eq!(PostError::InvalidSortField("date".into()).to_string(), "Invalid sort field: date");
        assert_eq!(PostError::InvalidDirection("up".into()).to_string(), "Invalid direction: up");
        assert_eq!(
            PostError::MissingFields(vec!["title", "content"]).to_string(),
            "Missing or empty fields: title, content"
        );
        assert_eq!(PostError::NotFound(7).to_string(), "Post with id 7 was not found.");
        assert!(PostError::NotFound(7).is_not_found());
        assert!(!PostError::EmptyBody.is_not_found());
    }
}
