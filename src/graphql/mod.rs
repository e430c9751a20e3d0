//! GraphQL surface of the server: wire types, mappers, services and the
//! namespace resolvers hung off the query and mutation roots.

pub mod mappers;
pub mod resolvers;
pub mod services;
pub mod types;

use async_graphql::{EmptySubscription, Object, Schema};
use std::sync::Arc;

use crate::graphql::mappers::{BlogPostMapper, GalleryItemMapper, SongMapper};
use crate::graphql::resolvers::{
    BlogMutations, BlogQueries, GalleryMutations, GalleryQueries, StemPlayerQueries,
};
use crate::graphql::services::{
    BlogGraphQlService, GalleryGraphQlService, StemPlayerGraphQlService,
};
use crate::service::{GalleryService, PostService, SongService};
use crate::store::Repositories;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Every GraphQL service, wired once at startup.
#[derive(Clone)]
pub struct AppServices {
    pub stem_player: Arc<StemPlayerGraphQlService>,
    pub blog: Arc<BlogGraphQlService>,
    pub gallery: Arc<GalleryGraphQlService>,
}

impl AppServices {
    pub fn new(repositories: &Repositories, stem_path_prefix: &str) -> Self {
        let songs = Arc::new(SongService::new(repositories.songs.clone()));
        let posts = Arc::new(PostService::new(repositories.posts.clone()));
        let gallery = Arc::new(GalleryService::new(repositories.gallery.clone()));

        Self {
            stem_player: Arc::new(StemPlayerGraphQlService::new(
                songs,
                SongMapper::with_prefix(stem_path_prefix),
            )),
            blog: Arc::new(BlogGraphQlService::new(posts, BlogPostMapper::new())),
            gallery: Arc::new(GalleryGraphQlService::new(
                gallery,
                GalleryItemMapper::new(),
            )),
        }
    }
}

pub struct QueryRoot {
    services: AppServices,
}

#[Object]
impl QueryRoot {
    async fn stem_player_queries(&self) -> StemPlayerQueries {
        StemPlayerQueries::new(self.services.stem_player.clone())
    }

    async fn blog_queries(&self) -> BlogQueries {
        BlogQueries::new(self.services.blog.clone())
    }

    async fn gallery_queries(&self) -> GalleryQueries {
        GalleryQueries::new(self.services.gallery.clone())
    }
}

pub struct MutationRoot {
    services: AppServices,
}

#[Object]
impl MutationRoot {
    async fn blog_mutations(&self) -> BlogMutations {
        BlogMutations::new(self.services.blog.clone())
    }

    async fn gallery_mutations(&self) -> GalleryMutations {
        GalleryMutations::new(self.services.gallery.clone())
    }
}

pub fn build_schema(services: AppServices) -> AppSchema {
    Schema::build(
        QueryRoot {
            services: services.clone(),
        },
        MutationRoot { services },
        EmptySubscription,
    )
    .finish()
}
