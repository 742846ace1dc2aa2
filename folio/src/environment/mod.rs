use folio_config::Config;
use folio_core_pagination_impl::PaginationServiceConfig;
use folio_core_posts_impl::PostFeatureConfig;
use folio_models::pagination::SlotBudget;
use types::{ColorScheme, Pagination, PostFeature, PostRepo, ThemeFeature, ThemeRepo};

pub mod types;

/// Builds the concrete services from the loaded configuration.
#[derive(Debug)]
pub struct Provider<'a> {
    config: &'a Config,
}

impl<'a> Provider<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination_with_budget(self.config.pagination.max_slots)
    }

    pub fn pagination_with_budget(&self, max_slots: SlotBudget) -> Pagination {
        Pagination::new(PaginationServiceConfig { max_slots })
    }

    pub fn post_feature(&self) -> PostFeature {
        PostFeature::new(
            PostRepo::new(self.config.posts.meta_path.clone()),
            self.pagination(),
            PostFeatureConfig {
                per_page: self.config.posts.per_page,
            },
        )
    }

    pub fn theme_feature(&self) -> ThemeFeature {
        ThemeFeature::new(
            ThemeRepo::new(self.config.theme.storage_path.clone()),
            ColorScheme::from_env(),
        )
    }
}
