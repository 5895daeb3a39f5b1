// Record store: three independent JSON-file-backed collections plus the
// validated create-mutations that are the only writers.

pub mod collection;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Comment, Post, User};
use collection::Collection;

pub struct Store {
    users: Collection<User>,
    posts: Collection<Post>,
    comments: Collection<Comment>,
}

impl Store {
    /// Open the store over `data_dir`, loading `users.json`, `posts.json`
    /// and `comments.json`. Missing files are bootstrapped to empty lists;
    /// a malformed file aborts startup.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        Ok(Self {
            users: Collection::load(dir.join("users.json"))?,
            posts: Collection::load(dir.join("posts.json"))?,
            comments: Collection::load(dir.join("comments.json"))?,
        })
    }

    // ---- reads -----------------------------------------------------------

    pub fn users(&self) -> Vec<User> {
        self.users.all()
    }

    pub fn posts(&self) -> Vec<Post> {
        self.posts.all()
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.comments.all()
    }

    pub fn user_by_id(&self, id: &str) -> Option<User> {
        self.users.find(|u| u.id == id)
    }

    pub fn post_by_id(&self, id: &str) -> Option<Post> {
        self.posts.find(|p| p.id == id)
    }

    /// Users whose name contains `query`, case-insensitively.
    pub fn search_users(&self, query: &str) -> Vec<User> {
        let query = query.to_lowercase();
        self.users.filter(|u| u.name.to_lowercase().contains(&query))
    }

    /// Posts whose title or body contains `query`, case-insensitively.
    pub fn search_posts(&self, query: &str) -> Vec<Post> {
        let query = query.to_lowercase();
        self.posts.filter(|p| {
            p.title.to_lowercase().contains(&query) || p.body.to_lowercase().contains(&query)
        })
    }

    /// Posts whose id appears in `ids`, in collection order.
    pub fn posts_by_ids(&self, ids: &[String]) -> Vec<Post> {
        self.posts.filter(|p| ids.contains(&p.id))
    }

    pub fn comments_for_post(&self, post_id: &str) -> Vec<Comment> {
        self.comments.filter(|c| c.post_id == post_id)
    }

    pub fn comments_by_author(&self, user_id: &str) -> Vec<Comment> {
        self.comments.filter(|c| c.comment_author_id == user_id)
    }

    // ---- validated mutations --------------------------------------------

    /// Create a user. Fails if another user already holds `email`
    /// (case-sensitive exact match). The uniqueness check and the append run
    /// under the users collection's write lock.
    pub fn create_user(&self, name: String, email: String, age: Option<i32>) -> AppResult<User> {
        let user = self.users.append_with(|users| {
            if users.iter().any(|u| u.email == email) {
                return Err(AppError::DuplicateEmail(email.clone()));
            }
            Ok(User {
                id: Uuid::new_v4().to_string(),
                name,
                email,
                age,
                post_ids: Vec::new(),
            })
        })?;
        tracing::info!(id = %user.id, "user created");
        Ok(user)
    }

    /// Create a post. Fails if `author_id` resolves to no user. Users are
    /// never deleted, so the existence check stays valid after its lock is
    /// released. The author's `postIds` list is left untouched; the new post
    /// will not show up under `User.posts`.
    pub fn create_post(
        &self,
        title: String,
        body: String,
        published: bool,
        author_id: String,
    ) -> AppResult<Post> {
        if !self.users.any(|u| u.id == author_id) {
            return Err(AppError::AuthorNotFound(author_id));
        }
        let post = self.posts.append(Post {
            id: Uuid::new_v4().to_string(),
            title,
            body,
            published,
            author_id,
        })?;
        tracing::info!(id = %post.id, author = %post.author_id, "post created");
        Ok(post)
    }

    /// Create a comment. Fails if `comment_author_id` resolves to no user,
    /// or if `post_id` resolves to no post or to an unpublished one.
    pub fn create_comment(
        &self,
        text: String,
        comment_author_id: String,
        post_id: String,
    ) -> AppResult<Comment> {
        if !self.users.any(|u| u.id == comment_author_id) {
            return Err(AppError::AuthorNotFound(comment_author_id));
        }
        match self.posts.find(|p| p.id == post_id) {
            Some(post) if post.published => {}
            _ => return Err(AppError::PostNotEligible(post_id)),
        }
        let comment = self.comments.append(Comment {
            id: Uuid::new_v4().to_string(),
            text,
            comment_author_id,
            post_id,
        })?;
        tracing::info!(id = %comment.id, post = %comment.post_id, "comment created");
        Ok(comment)
    }
}
