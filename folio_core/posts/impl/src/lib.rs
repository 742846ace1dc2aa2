use std::collections::BTreeMap;

use folio_core_pagination_contracts::PaginationService;
use folio_core_posts_contracts::{
    PostFeatureService, PostGetError, PostListQuery, PostListResult,
};
use folio_models::post::{PostMeta, PostSlug, PostsPerPage, TagCount};
use folio_persistence_contracts::post::PostRepository;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PostFeatureServiceImpl<PostRepo, Pagination> {
    post_repo: PostRepo,
    pagination: Pagination,
    config: PostFeatureConfig,
}

#[derive(Debug, Clone, Default)]
pub struct PostFeatureConfig {
    pub per_page: PostsPerPage,
}

impl<PostRepo, Pagination> PostFeatureServiceImpl<PostRepo, Pagination> {
    pub fn new(post_repo: PostRepo, pagination: Pagination, config: PostFeatureConfig) -> Self {
        Self {
            post_repo,
            pagination,
            config,
        }
    }
}

impl<PostRepo, Pagination> PostFeatureService for PostFeatureServiceImpl<PostRepo, Pagination>
where
    PostRepo: PostRepository,
    Pagination: PaginationService,
{
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: PostListQuery) -> anyhow::Result<PostListResult> {
        let mut posts = self.post_repo.list().await?;
        posts.retain(|post| query.filter.matches(post));
        sort_newest_first(&mut posts);

        let per_page = *self.config.per_page;
        let total = posts.len() as u64;
        let total_pages = total.div_ceil(per_page).max(1);

        let pagination = self
            .pagination
            .controls(query.page, i64::try_from(total_pages).unwrap_or(i64::MAX));
        let page = pagination.position.current().into_inner();
        debug!(total, total_pages, page, "listing posts");

        let posts = posts
            .into_iter()
            .skip(((page - 1) * per_page) as usize)
            .take(per_page as usize)
            .collect();

        Ok(PostListResult {
            total,
            posts,
            pagination,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn get(&self, slug: &PostSlug) -> Result<PostMeta, PostGetError> {
        self.post_repo
            .list()
            .await?
            .into_iter()
            .find(|post| post.slug == *slug)
            .ok_or(PostGetError::NotFound)
    }

    #[tracing::instrument(skip(self))]
    async fn tags(&self) -> anyhow::Result<Vec<TagCount>> {
        let mut counts = BTreeMap::new();
        for tag in self.post_repo.list().await?.into_iter().flat_map(|post| post.tags) {
            *counts.entry(tag).or_insert(0) += 1;
        }

        let mut tags = counts
            .into_iter()
            .map(|(tag, count)| TagCount { tag, count })
            .collect::<Vec<_>>();
        // stable sort keeps the alphabetical order of the map for equal counts
        tags.sort_by(|a, b| b.count.cmp(&a.count));

        Ok(tags)
    }
}

fn sort_newest_first(posts: &mut [PostMeta]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.title.cmp(&b.title)));
}

#[cfg(test)]
mod tests {
    use folio_core_pagination_contracts::MockPaginationService;
    use folio_core_pagination_impl::PaginationServiceImpl;
    use folio_demo::post::{ALL_POSTS, DARK_MODE, HELLO_WORLD, NOTES, WINDOWED_PAGINATION};
    use folio_models::{
        pagination::PagePosition,
        post::{PostFilter, PostTag},
    };
    use folio_persistence_contracts::post::MockPostRepository;
    use folio_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    type Sut<PostRepo = MockPostRepository, Pagination = PaginationServiceImpl> =
        PostFeatureServiceImpl<PostRepo, Pagination>;

    fn sut(post_repo: MockPostRepository) -> Sut {
        PostFeatureServiceImpl::new(
            post_repo,
            PaginationServiceImpl::default(),
            PostFeatureConfig::default(),
        )
    }

    #[tokio::test]
    async fn list_first_page() {
        // Arrange
        let post_repo = MockPostRepository::new().with_list(ALL_POSTS.clone());
        let expected = [&*DARK_MODE, &*WINDOWED_PAGINATION]
            .into_iter()
            .chain(NOTES.iter().rev().take(8))
            .cloned()
            .collect::<Vec<_>>();

        // Act
        let result = sut(post_repo).list(PostListQuery::default()).await;

        // Assert
        let result = result.unwrap();
        assert_eq!(result.total, 23);
        assert_eq!(result.posts, expected);
        assert_eq!(result.pagination.position, PagePosition::new(1, 3));
    }

    #[tokio::test]
    async fn list_page_out_of_range() {
        // Arrange
        let post_repo = MockPostRepository::new().with_list(ALL_POSTS.clone());
        let expected = NOTES[..2]
            .iter()
            .rev()
            .chain([&*HELLO_WORLD])
            .cloned()
            .collect::<Vec<_>>();

        // Act
        let result = sut(post_repo)
            .list(PostListQuery {
                page: 99,
                filter: PostFilter::default(),
            })
            .await;

        // Assert
        let result = result.unwrap();
        assert_eq!(result.posts, expected);
        assert_eq!(result.pagination.position, PagePosition::new(3, 3));
        assert!(!result.pagination.next.is_enabled());
    }

    #[tokio::test]
    async fn list_filtered_by_tag() {
        // Arrange
        let post_repo = MockPostRepository::new().with_list(ALL_POSTS.clone());
        let expected = [
            &*WINDOWED_PAGINATION,
            &NOTES[19],
            &NOTES[14],
            &NOTES[9],
            &NOTES[4],
        ]
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();

        // Act
        let result = sut(post_repo)
            .list(PostListQuery {
                page: 2,
                filter: PostFilter {
                    tag: Some("Rust".try_into().unwrap()),
                },
            })
            .await;

        // Assert
        let result = result.unwrap();
        assert_eq!(result.total, 5);
        assert_eq!(result.posts, expected);
        assert_eq!(result.pagination.position, PagePosition::new(1, 1));
    }

    #[tokio::test]
    async fn list_slices_by_pagination_controls() {
        // Arrange
        let post_repo = MockPostRepository::new().with_list(ALL_POSTS.clone());
        let controls = PaginationServiceImpl::default().controls(2, 3);
        let pagination = MockPaginationService::new().with_controls(2, 3, controls.clone());
        let sut: Sut<_, MockPaginationService> =
            PostFeatureServiceImpl::new(post_repo, pagination, PostFeatureConfig::default());
        let expected = NOTES[2..12].iter().rev().cloned().collect::<Vec<_>>();

        // Act
        let result = sut
            .list(PostListQuery {
                page: 2,
                filter: PostFilter::default(),
            })
            .await;

        // Assert
        let result = result.unwrap();
        assert_eq!(result.posts, expected);
        assert_eq!(result.pagination, controls);
    }

    #[tokio::test]
    async fn list_custom_page_size() {
        // Arrange
        let post_repo = MockPostRepository::new().with_list(ALL_POSTS.clone());
        let sut = PostFeatureServiceImpl::new(
            post_repo,
            PaginationServiceImpl::default(),
            PostFeatureConfig {
                per_page: 4.try_into().unwrap(),
            },
        );

        // Act
        let result = sut
            .list(PostListQuery {
                page: 6,
                filter: PostFilter::default(),
            })
            .await;

        // Assert
        let result = result.unwrap();
        assert_eq!(result.pagination.position, PagePosition::new(6, 6));
        assert_eq!(
            result.posts,
            NOTES[..2]
                .iter()
                .rev()
                .chain([&*HELLO_WORLD])
                .cloned()
                .collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn list_empty() {
        // Arrange
        let post_repo = MockPostRepository::new().with_list(vec![]);

        // Act
        let result = sut(post_repo).list(PostListQuery::default()).await;

        // Assert
        let result = result.unwrap();
        assert_eq!(result.total, 0);
        assert!(result.posts.is_empty());
        assert_eq!(result.pagination.position, PagePosition::new(1, 1));
    }

    #[tokio::test]
    async fn list_repository_error() {
        // Arrange
        let post_repo = MockPostRepository::new().with_list_error("disk on fire");

        // Act
        let result = sut(post_repo).list(PostListQuery::default()).await;

        // Assert
        assert_eq!(result.unwrap_err().to_string(), "disk on fire");
    }

    #[tokio::test]
    async fn get_ok() {
        // Arrange
        let post_repo = MockPostRepository::new().with_list(ALL_POSTS.clone());

        // Act
        let result = sut(post_repo).get(&"Dark-Mode-Without-Flicker".try_into().unwrap()).await;

        // Assert
        assert_eq!(result.unwrap(), *DARK_MODE);
    }

    #[tokio::test]
    async fn get_not_found() {
        // Arrange
        let post_repo = MockPostRepository::new().with_list(ALL_POSTS.clone());

        // Act
        let result = sut(post_repo).get(&"does-not-exist".try_into().unwrap()).await;

        // Assert
        assert_matches!(result, Err(PostGetError::NotFound));
    }

    #[tokio::test]
    async fn tags() {
        // Arrange
        let post_repo = MockPostRepository::new().with_list(ALL_POSTS.clone());

        // Act
        let result = sut(post_repo).tags().await;

        // Assert
        let result = result
            .unwrap()
            .into_iter()
            .map(|TagCount { tag, count }| (tag.into_inner(), count))
            .collect::<Vec<_>>();
        assert_eq!(
            result,
            [
                ("notes".to_owned(), 20),
                ("rust".to_owned(), 5),
                ("web".to_owned(), 2),
                ("meta".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn sort_ties_by_title() {
        let mut posts = vec![WINDOWED_PAGINATION.clone(), DARK_MODE.clone()];
        sort_newest_first(&mut posts);
        assert_eq!(posts, [DARK_MODE.clone(), WINDOWED_PAGINATION.clone()]);
    }

    #[test]
    fn tag_normalization_matches_filter() {
        let tag = PostTag::try_new("WEB").unwrap();
        assert!(DARK_MODE.has_tag(&tag));
    }
}
