use serde::{Deserialize, Serialize};

use crate::errors::PostError;

/// A blog post as stored and as returned on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self { id, title: title.into(), content: content.into() }
    }
}

/// The two posts a fresh store starts with.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(1, "Apple post", "Zebra content."),
        Post::new(2, "Zebra post", "Apple content."),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Title,
    Content,
}

impl SortField {
    /// Field names are matched exactly; `Title` is rejected.
    pub fn parse(raw: &str) -> Result<Self, PostError> {
        match raw {
            "title" => Ok(Self::Title),
            "content" => Ok(Self::Content),
            other => Err(PostError::InvalidSortField(other.to_string())),
        }
    }

    fn key(self, post: &Post) -> String {
        match self {
            Self::Title => post.title.to_lowercase(),
            Self::Content => post.content.to_lowercase(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(raw: &str) -> Result<Self, PostError> {
        let lowered = raw.to_lowercase();
        match lowered.as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(PostError::InvalidDirection(lowered)),
        }
    }
}

/// A validated `sort`/`direction` pair from the list query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Validates the raw query values. The sort field is checked first, and the
    /// direction is checked even when no field is given. An empty `sort` means
    /// "unsorted".
    pub fn from_query(sort: Option<&str>, direction: Option<&str>) -> Result<Option<Self>, PostError> {
        let field = match sort {
            Some(raw) if !raw.is_empty() => Some(SortField::parse(raw)?),
            _ => None,
        };
        let direction = match direction {
            Some(raw) => SortDirection::parse(raw)?,
            None => SortDirection::default(),
        };
        Ok(field.map(|field| Self { field, direction }))
    }

    /// Stable sort on the lowercased field; equal keys keep their relative
    /// order in both directions.
    pub fn apply(&self, posts: &mut [Post]) {
        posts.sort_by(|a, b| {
            let ord = self.field.key(a).cmp(&self.field.key(b));
            match self.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
    }
}

/// Case-insensitive substring filter; an empty needle matches everything.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn sort_field_is_case_sensitive() {
        assert_eq!(SortField::parse("title"), Ok(SortField::Title));
        assert_eq!(SortField::parse("content"), Ok(SortField::Content));
        assert_eq!(
            SortField::parse("Title"),
            Err(PostError::InvalidSortField("Title".into()))
        );
    }

    #[test]
    fn direction_is_case_insensitive() {
        assert_eq!(SortDirection::parse("DESC"), Ok(SortDirection::Desc));
        assert_eq!(SortDirection::parse("Asc"), Ok(SortDirection::Asc));
        assert_eq!(
            SortDirection::parse("Sideways"),
            Err(PostError::InvalidDirection("sideways".into()))
        );
        assert_eq!(SortDirection::parse(""), Err(PostError::InvalidDirection(String::new())));
    }

    #[test]
    fn from_query_validates_direction_without_field() {
        assert_eq!(SortSpec::from_query(None, None), Ok(None));
        assert_eq!(SortSpec::from_query(Some(""), Some("desc")), Ok(None));
        assert_eq!(
            SortSpec::from_query(None, Some("up")),
            Err(PostError::InvalidDirection("up".into()))
        );
        // field error wins when both are bad
        assert_eq!(
            SortSpec::from_query(Some("id"), Some("up")),
            Err(PostError::InvalidSortField("id".into()))
        );
        assert_eq!(
            SortSpec::from_query(Some("content"), None),
            Ok(Some(SortSpec { field: SortField::Content, direction: SortDirection::Asc }))
        );
    }

    #[test]
    fn apply_sorts_case_insensitively() {
        let mut posts = vec![
            Post::new(1, "banana", "x"),
            Post::new(2, "Apple", "x"),
            Post::new(3, "cherry", "x"),
        ];
        SortSpec { field: SortField::Title, direction: SortDirection::Asc }.apply(&mut posts);
        assert_eq!(titles(&posts), ["Apple", "banana", "cherry"]);
        SortSpec { field: SortField::Title, direction: SortDirection::Desc }.apply(&mut posts);
        assert_eq!(titles(&posts), ["cherry", "banana", "Apple"]);
    }

    #[test]
    fn apply_keeps_ties_in_original_order_both_ways() {
        let base = vec![
            Post::new(1, "same", "b"),
            Post::new(2, "SAME", "a"),
            Post::new(3, "other", "c"),
        ];
        let mut asc = base.clone();
        SortSpec { field: SortField::Title, direction: SortDirection::Asc }.apply(&mut asc);
        assert_eq!(asc.iter().map(|p| p.id).collect::<Vec<_>>(), [3, 1, 2]);

        let mut desc = base;
        SortSpec { field: SortField::Title, direction: SortDirection::Desc }.apply(&mut desc);
        assert_eq!(desc.iter().map(|p| p.id).collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn contains_ci_matches_substrings() {
        assert!(contains_ci("Zebra post", "zebra"));
        assert!(contains_ci("Zebra post", ""));
        assert!(!contains_ci("Apple post", "zebra"));
    }
}
