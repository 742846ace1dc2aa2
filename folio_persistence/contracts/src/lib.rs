pub mod post;
pub mod theme;
