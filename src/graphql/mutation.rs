use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::models::{Comment, Post, User};
use crate::store::Store;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        age: Option<i32>,
    ) -> Result<User> {
        let store = ctx.data::<Arc<Store>>()?;
        store
            .create_user(name, email, age)
            .map_err(|e| e.extend())
    }

    async fn create_post(
        &self,
        ctx: &Context<'_>,
        title: String,
        body: String,
        published: bool,
        author_id: ID,
    ) -> Result<Post> {
        let store = ctx.data::<Arc<Store>>()?;
        store
            .create_post(title, body, published, author_id.to_string())
            .map_err(|e| e.extend())
    }

    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        text: String,
        comment_author_id: ID,
        post_id: ID,
    ) -> Result<Comment> {
        let store = ctx.data::<Arc<Store>>()?;
        store
            .create_comment(text, comment_author_id.to_string(), post_id.to_string())
            .map_err(|e| e.extend())
    }
}
