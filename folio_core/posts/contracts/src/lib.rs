use std::future::Future;

use folio_models::{
    pagination::{parse_page_number, PaginationControls},
    post::{PostFilter, PostMeta, PostSlug, PostTag, TagCount},
};
use serde::Serialize;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PostFeatureService: Send + Sync + 'static {
    /// Returns one page of posts matching the given filter, newest first.
    ///
    /// The requested page is clamped into the available range.
    fn list(
        &self,
        query: PostListQuery,
    ) -> impl Future<Output = anyhow::Result<PostListResult>> + Send;

    /// Returns the post with the given slug.
    fn get(&self, slug: &PostSlug) -> impl Future<Output = Result<PostMeta, PostGetError>> + Send;

    /// Returns every tag with the number of posts carrying it, most used
    /// first.
    fn tags(&self) -> impl Future<Output = anyhow::Result<Vec<TagCount>>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListQuery {
    /// Requested page, not yet range checked.
    pub page: i64,
    pub filter: PostFilter,
}

impl Default for PostListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            filter: PostFilter::default(),
        }
    }
}

impl PostListQuery {
    /// Builds a query from untrusted request parameters.
    ///
    /// Invalid values never fail the request: an unparsable page falls back
    /// to the first page and an invalid tag to no filter.
    pub fn from_params(page: Option<&str>, tag: Option<&str>) -> Self {
        Self {
            page: page
                .and_then(|page| parse_page_number(page).ok())
                .unwrap_or(1),
            filter: PostFilter {
                tag: tag.and_then(|tag| PostTag::try_new(tag).ok()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostListResult {
    /// Number of posts matching the filter, across all pages.
    pub total: u64,
    pub posts: Vec<PostMeta>,
    pub pagination: PaginationControls,
}

#[derive(Debug, Error)]
pub enum PostGetError {
    #[error("Post not found.")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockPostFeatureService {
    pub fn with_list(mut self, query: PostListQuery, result: PostListResult) -> Self {
        self.expect_list()
            .once()
            .with(mockall::predicate::eq(query))
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
