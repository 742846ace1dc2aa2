use std::sync::LazyLock;

use folio_models::post::{PostMeta, PostTag};

use crate::date;

pub const NOTES_COUNT: u32 = 20;

pub static HELLO_WORLD: LazyLock<PostMeta> = LazyLock::new(|| PostMeta {
    id: "1a6e0c2b".try_into().unwrap(),
    slug: "hello-world".try_into().unwrap(),
    title: "Hello World".try_into().unwrap(),
    description: Some("Why this blog exists.".try_into().unwrap()),
    tags: vec!["meta".try_into().unwrap()],
    date: date(2023, 12, 24),
});

pub static WINDOWED_PAGINATION: LazyLock<PostMeta> = LazyLock::new(|| PostMeta {
    id: "7f3d91aa".try_into().unwrap(),
    slug: "windowed-pagination".try_into().unwrap(),
    title: "Windowed Pagination".try_into().unwrap(),
    description: Some("Showing page numbers without running out of room.".try_into().unwrap()),
    tags: vec!["rust".try_into().unwrap(), "web".try_into().unwrap()],
    date: date(2024, 3, 2),
});

/// Published on the same day as [`WINDOWED_PAGINATION`].
pub static DARK_MODE: LazyLock<PostMeta> = LazyLock::new(|| PostMeta {
    id: "c08b5e14".try_into().unwrap(),
    slug: "dark-mode-without-flicker".try_into().unwrap(),
    title: "Dark Mode Without Flicker".try_into().unwrap(),
    description: None,
    tags: vec!["web".try_into().unwrap()],
    date: date(2024, 3, 2),
});

/// Weekly notes, published daily in January 2024. Every fifth one is also
/// tagged `rust`.
pub static NOTES: LazyLock<Vec<PostMeta>> = LazyLock::new(|| {
    (1..=NOTES_COUNT)
        .map(|n| PostMeta {
            id: format!("notes-{n:02}").try_into().unwrap(),
            slug: format!("weekly-notes-{n}").try_into().unwrap(),
            title: format!("Weekly Notes #{n:02}").try_into().unwrap(),
            description: None,
            tags: std::iter::once("notes")
                .chain((n % 5 == 0).then_some("rust"))
                .map(|tag| PostTag::try_new(tag).unwrap())
                .collect(),
            date: date(2024, 1, n),
        })
        .collect()
});

/// All demo posts in storage order (not sorted by date).
pub static ALL_POSTS: LazyLock<Vec<PostMeta>> = LazyLock::new(|| {
    std::iter::once(&*HELLO_WORLD)
        .chain(NOTES.iter())
        .chain([&*WINDOWED_PAGINATION, &*DARK_MODE])
        .cloned()
        .collect()
});
