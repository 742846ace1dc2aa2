pub mod pagination;
pub mod post;
pub mod theme;

mod macros;
