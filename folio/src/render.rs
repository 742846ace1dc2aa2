//! Plain text rendering for terminal output.

use std::fmt::Write;

use folio_core_posts_contracts::PostListResult;
use folio_models::{
    pagination::{PageControl, PaginationControls},
    post::{PostMeta, TagCount},
};

/// Renders pagination controls on a single line, e.g. `‹ 1 … 9 [10] 11 … 20 ›`.
///
/// The current page is bracketed. A disabled previous/next control is
/// replaced by a space so the page numbers do not shift.
pub fn pagination(controls: &PaginationControls) -> String {
    let mut parts = Vec::with_capacity(controls.pages.len() + 2);
    parts.push(if controls.previous.is_enabled() { "‹" } else { " " }.to_owned());
    parts.extend(controls.pages.iter().map(|control| match *control {
        PageControl::Page {
            page,
            current: true,
        } => format!("[{page}]"),
        PageControl::Page { page, .. } => page.to_string(),
        PageControl::Ellipsis => "…".to_owned(),
    }));
    parts.push(if controls.next.is_enabled() { "›" } else { " " }.to_owned());
    parts.join(" ")
}

pub fn post_line(post: &PostMeta) -> String {
    let mut line = format!("{}  {}", post.date, post.title);
    if !post.tags.is_empty() {
        let tags = post.tags.iter().map(|tag| tag.as_str()).collect::<Vec<_>>();
        let _ = write!(line, "  [{}]", tags.join(", "));
    }
    line
}

pub fn post_list(result: &PostListResult) -> String {
    let mut out = String::new();
    if result.posts.is_empty() {
        out.push_str("No posts found.\n");
    }
    for post in &result.posts {
        out.push_str(&post_line(post));
        out.push('\n');
    }

    let position = result.pagination.position;
    let _ = write!(
        out,
        "\n{}\n{} post{}, page {} of {}\n",
        pagination(&result.pagination),
        result.total,
        if result.total == 1 { "" } else { "s" },
        position.current(),
        position.total(),
    );
    out
}

pub fn post_detail(post: &PostMeta) -> String {
    let mut out = format!("{}\nslug: {}\ndate: {}\n", post.title, post.slug, post.date);
    if !post.tags.is_empty() {
        let tags = post.tags.iter().map(|tag| tag.as_str()).collect::<Vec<_>>();
        let _ = writeln!(out, "tags: {}", tags.join(", "));
    }
    if let Some(description) = &post.description {
        let _ = write!(out, "\n{description}\n");
    }
    out
}

pub fn tags(tags: &[TagCount]) -> String {
    let width = tags.iter().map(|tag| tag.tag.chars().count()).max().unwrap_or(0);
    tags.iter().fold(String::new(), |mut out, TagCount { tag, count }| {
        let _ = writeln!(out, "{:<width$}  {count}", tag.as_str());
        out
    })
}
