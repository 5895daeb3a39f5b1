use std::sync::Arc;

use crate::{
    config::Config,
    graphql::{build_schema, BlogSchema},
    store::Store,
};

#[derive(Clone)]
pub struct AppState {
    pub schema: BlogSchema,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        // Load the three collections; a malformed file aborts startup
        let store = Arc::new(Store::open(&config.data.dir)?);
        let schema = build_schema(store);

        Ok(Self { schema, config })
    }
}
