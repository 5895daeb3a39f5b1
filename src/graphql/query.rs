use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use crate::models::{Comment, Post, User};
use crate::store::Store;

/// Fixed demo grade list for the `grades` field; not backed by the store.
const GRADES: [i32; 8] = [99, 80, 93, 42, 56, 14, 65, 100];

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn greeting(&self, name: Option<String>) -> String {
        match name {
            Some(name) => format!("Hello {}!", name),
            None => "Hello!".to_string(),
        }
    }

    async fn hello(&self) -> &str {
        "This is a GraphQL API over flat JSON files"
    }

    async fn name(&self) -> &str {
        "Alex Doe"
    }

    async fn location(&self) -> &str {
        "Porto, Portugal"
    }

    async fn bio(&self) -> &str {
        "Software engineer, learning GraphQL"
    }

    /// All users, or the ones whose name contains `query`
    /// case-insensitively.
    async fn users(&self, ctx: &Context<'_>, query: Option<String>) -> Result<Vec<User>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(match query {
            Some(query) => store.search_users(&query),
            None => store.users(),
        })
    }

    /// Fixed demo user, not part of the store.
    async fn me(&self) -> User {
        User {
            id: "1".to_string(),
            name: "Alex Doe".to_string(),
            email: "alex@example.com".to_string(),
            age: Some(23),
            post_ids: Vec::new(),
        }
    }

    /// All posts, or the ones whose title or body contains `query`
    /// case-insensitively.
    async fn posts(&self, ctx: &Context<'_>, query: Option<String>) -> Result<Vec<Post>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(match query {
            Some(query) => store.search_posts(&query),
            None => store.posts(),
        })
    }

    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        let store = ctx.data::<Arc<Store>>()?;
        Ok(store.comments())
    }

    /// The demo grades strictly greater than 50.
    async fn grades(&self) -> Vec<i32> {
        GRADES.iter().copied().filter(|grade| *grade > 50).collect()
    }

    /// Sum of the given numbers; the empty list sums to 0.
    async fn add(&self, number: Vec<f64>) -> f64 {
        number.iter().sum()
    }
}
