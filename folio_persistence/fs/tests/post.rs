use folio_demo::post::ALL_POSTS;
use folio_persistence_contracts::post::PostRepository;
use folio_persistence_fs::post::FsPostRepository;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("postMeta.json");
    std::fs::write(&path, serde_json::to_vec(&*ALL_POSTS).unwrap()).unwrap();

    let posts = FsPostRepository::new(&path).list().await.unwrap();

    assert_eq!(posts, *ALL_POSTS);
}

#[tokio::test]
async fn list_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("postMeta.json");
    std::fs::write(&path, "[]").unwrap();

    let posts = FsPostRepository::new(&path).list().await.unwrap();

    assert!(posts.is_empty());
}

#[tokio::test]
async fn list_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("postMeta.json");

    let err = FsPostRepository::new(&path).list().await.unwrap_err();

    assert!(err.to_string().starts_with("Failed to read post metadata"));
}

#[tokio::test]
async fn list_invalid_post() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("postMeta.json");
    std::fs::write(
        &path,
        r#"[{"id": "1", "slug": "a", "title": "", "date": "2024-01-01"}]"#,
    )
    .unwrap();

    let err = FsPostRepository::new(&path).list().await.unwrap_err();

    assert!(err.to_string().starts_with("Failed to parse post metadata"));
}
