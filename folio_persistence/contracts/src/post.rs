use std::future::Future;

use folio_models::post::PostMeta;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PostRepository: Send + Sync + 'static {
    /// Returns the metadata of all published posts, in storage order.
    fn list(&self) -> impl Future<Output = anyhow::Result<Vec<PostMeta>>> + Send;
}

#[cfg(feature = "mock")]
impl MockPostRepository {
    pub fn with_list(mut self, result: Vec<PostMeta>) -> Self {
        self.expect_list()
            .once()
            .return_once(|| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_error(mut self, message: &'static str) -> Self {
        self.expect_list()
            .once()
            .return_once(move || Box::pin(std::future::ready(Err(anyhow::anyhow!(message)))));
        self
    }
}
