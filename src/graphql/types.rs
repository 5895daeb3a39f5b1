// Type-level field resolvers: one typed resolver per (type, field) pair.
//
// Relationship fields are computed per access by linear scans over the
// store, never cached. Dangling references resolve to null instead of
// raising an error; only mutations validate strictly.

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use crate::models::{Comment, Post, User};
use crate::store::Store;

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn email(&self) -> &str {
        &self.email
    }

    async fn age(&self) -> Option<i32> {
        self.age
    }

    /// Posts listed in the user's creation-time `postIds` snapshot. Posts
    /// created after the user never appear here.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.posts_by_ids(&self.post_ids))
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.comments_by_author(&self.id))
    }
}

#[Object]
impl Post {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn title(&self) -> &str {
        &self.title
    }

    async fn body(&self) -> &str {
        &self.body
    }

    async fn published(&self) -> bool {
        self.published
    }

    /// The owning user, or null if the author id dangles.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.user_by_id(&self.author_id))
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.comments_for_post(&self.id))
    }
}

#[Object]
impl Comment {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn text(&self) -> &str {
        &self.text
    }

    /// The commenting user, or null if the author id dangles.
    async fn comment_author(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.user_by_id(&self.comment_author_id))
    }

    /// The commented post, or null if the post id dangles.
    async fn post(&self, ctx: &Context<'_>) -> Result<Option<Post>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.post_by_id(&self.post_id))
    }
}
