use anyhow::Context;
use clap::Subcommand;
use folio_config::Config;
use folio_core_posts_contracts::{PostFeatureService, PostListQuery};
use folio_models::post::PostSlug;

use crate::{environment::Provider, render};

#[derive(Debug, Subcommand)]
pub enum PostsCommand {
    /// List posts, newest first
    #[command(aliases(["ls", "l"]))]
    List {
        /// The page to show; invalid values show the first page
        #[arg(long, allow_hyphen_values = true)]
        page: Option<String>,
        /// Only show posts with this tag
        #[arg(long)]
        tag: Option<String>,
        /// Print the result as json
        #[arg(long)]
        json: bool,
    },
    /// Show a single post
    #[command(aliases(["show", "g"]))]
    Get {
        /// The slug of the post
        slug: String,
    },
    /// List all tags with the number of posts carrying them
    #[command(aliases(["t"]))]
    Tags,
}

impl PostsCommand {
    pub async fn invoke(self, config: &Config) -> anyhow::Result<()> {
        let post_feature = Provider::new(config).post_feature();
        let output = match self {
            PostsCommand::List { page, tag, json } => {
                let query = PostListQuery::from_params(page.as_deref(), tag.as_deref());
                list(&post_feature, query, json).await?
            }
            PostsCommand::Get { slug } => get(&post_feature, &slug).await?,
            PostsCommand::Tags => tags(&post_feature).await?,
        };
        print!("{output}");
        Ok(())
    }
}

pub async fn list(
    post_feature: &impl PostFeatureService,
    query: PostListQuery,
    json: bool,
) -> anyhow::Result<String> {
    let result = post_feature.list(query).await?;
    Ok(if json {
        serde_json::to_string_pretty(&result)? + "\n"
    } else {
        render::post_list(&result)
    })
}

pub async fn get(post_feature: &impl PostFeatureService, slug: &str) -> anyhow::Result<String> {
    let slug = PostSlug::try_new(slug).with_context(|| format!("Invalid slug {slug:?}"))?;
    let post = post_feature
        .get(&slug)
        .await
        .with_context(|| format!("Failed to get post {slug}"))?;
    Ok(render::post_detail(&post))
}

pub async fn tags(post_feature: &impl PostFeatureService) -> anyhow::Result<String> {
    Ok(render::tags(&post_feature.tags().await?))
}
