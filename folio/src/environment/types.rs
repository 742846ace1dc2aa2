use folio_core_pagination_impl::PaginationServiceImpl;
use folio_core_posts_impl::PostFeatureServiceImpl;
use folio_core_theme_impl::ThemeFeatureServiceImpl;
use folio_persistence_fs::{post::FsPostRepository, theme::FsThemeRepository};
use folio_shared_impl::color_scheme::ColorSchemeServiceImpl;

// Persistence
pub type PostRepo = FsPostRepository;
pub type ThemeRepo = FsThemeRepository;

// Shared
pub type ColorScheme = ColorSchemeServiceImpl;

// Core
pub type Pagination = PaginationServiceImpl;
pub type PostFeature = PostFeatureServiceImpl<PostRepo, Pagination>;
pub type ThemeFeature = ThemeFeatureServiceImpl<ThemeRepo, ColorScheme>;
