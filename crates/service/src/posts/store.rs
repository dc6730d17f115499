use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use super::domain::{contains_ci, seed_posts, Post, SortSpec};
use super::input::{NewPost, PostPatch};
use crate::errors::PostError;

/// In-memory, insertion-ordered post collection.
///
/// Cloning is cheap and every clone shares the same posts; all operations go
/// through one `RwLock`, so each call is atomic with respect to the others.
#[derive(Clone, Default)]
pub struct PostStore {
    inner: Arc<RwLock<Vec<Post>>>,
}

impl PostStore {
    /// Empty store; the first created post gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self { inner: Arc::new(RwLock::new(posts)) }
    }

    /// Store holding the two demo posts.
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// All posts, in store order unless `sort` names a field.
    pub async fn list(&self, sort: Option<&str>, direction: Option<&str>) -> Result<Vec<Post>, PostError> {
        let spec = SortSpec::from_query(sort, direction)?;
        let mut posts = self.inner.read().await.clone();
        if let Some(spec) = spec {
            spec.apply(&mut posts);
        }
        Ok(posts)
    }

    /// Posts whose title and content contain the respective queries,
    /// ignoring case. Missing or empty queries match everything.
    pub async fn search(&self, title: Option<&str>, content: Option<&str>) -> Vec<Post> {
        let title = title.unwrap_or_default().to_lowercase();
        let content = content.unwrap_or_default().to_lowercase();
        let posts = self.inner.read().await;
        posts
            .iter()
            .filter(|p| contains_ci(&p.title, &title) && contains_ci(&p.content, &content))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: u64) -> Option<Post> {
        let posts = self.inner.read().await;
        posts.iter().find(|p| p.id == id).cloned()
    }

    /// Append a new post with id `max + 1` (1 when empty).
    pub async fn create(&self, input: NewPost) -> Result<Post, PostError> {
        let (title, content) = input.into_fields()?;
        let mut posts = self.inner.write().await;
        let id = posts.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        let post = Post { id, title, content };
        posts.push(post.clone());
        drop(posts);
        info!(id, "post created");
        Ok(post)
    }

    /// Apply `patch` in place. An unknown id is reported before the patch is
    /// looked at; `None` (no usable body) is `EmptyBody`, and a rejected patch
    /// leaves the post unchanged.
    pub async fn update(&self, id: u64, patch: Option<PostPatch>) -> Result<Post, PostError> {
        let mut posts = self.inner.write().await;
        let post = posts.iter_mut().find(|p| p.id == id).ok_or(PostError::NotFound(id))?;
        let patch = patch.ok_or(PostError::EmptyBody)?;
        patch.validate()?;
        if patch.is_noop() {
            debug!(id, "patch carried no known fields");
        }
        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.content = content;
        }
        let updated = post.clone();
        drop(posts);
        info!(id, "post updated");
        Ok(updated)
    }

    /// Remove the post and return its id. Remaining posts keep their order
    /// and ids.
    pub async fn delete(&self, id: u64) -> Result<u64, PostError> {
        let mut posts = self.inner.write().await;
        let idx = posts.iter().position(|p| p.id == id).ok_or(PostError::NotFound(id))?;
        posts.remove(idx);
        debug!(remaining = posts.len(), "store shrank");
        drop(posts);
        info!(id, "post deleted");
        Ok(id)
    }
}
