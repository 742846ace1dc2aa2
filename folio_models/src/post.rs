use chrono::NaiveDate;
use nutype::nutype;
use serde::{Deserialize, Serialize};

use crate::macros::nutype_string;

nutype_string!(PostId(sanitize(trim), validate(not_empty, len_char_max = 64)));
nutype_string!(PostSlug(
    sanitize(trim, lowercase),
    validate(not_empty, len_char_max = 128)
));
nutype_string!(PostTitle(sanitize(trim), validate(not_empty, len_char_max = 256)));
nutype_string!(PostDescription(sanitize(trim), validate(len_char_max = 1024)));
nutype_string!(PostTag(
    sanitize(trim, lowercase),
    validate(not_empty, len_char_max = 64)
));

/// Metadata of a single blog post as stored in the post metadata cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    pub id: PostId,
    pub slug: PostSlug,
    pub title: PostTitle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<PostDescription>,
    #[serde(default)]
    pub tags: Vec<PostTag>,
    pub date: NaiveDate,
}

impl PostMeta {
    pub fn has_tag(&self, tag: &PostTag) -> bool {
        self.tags.contains(tag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PostFilter {
    pub tag: Option<PostTag>,
}

impl PostFilter {
    pub fn matches(&self, post: &PostMeta) -> bool {
        self.tag.as_ref().map_or(true, |tag| post.has_tag(tag))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: PostTag,
    pub count: u64,
}

#[nutype(
    validate(greater_or_equal = 1, less_or_equal = PostsPerPage::MAX),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        Deref,
        TryFrom,
        Display,
        Default,
        Serialize,
        Deserialize,
    ),
    default = 10
)]
pub struct PostsPerPage(u64);

impl PostsPerPage {
    pub const MAX: u64 = 100;
}
