use clap::Subcommand;
use folio_config::Config;
use folio_core_theme_contracts::ThemeFeatureService;
use folio_models::theme::Theme;
use tracing::info;

use crate::environment::Provider;

#[derive(Debug, Subcommand)]
pub enum ThemeCommand {
    /// Print the active theme
    #[command(aliases(["g"]))]
    Get,
    /// Choose and persist a theme
    #[command(aliases(["s"]))]
    Set {
        /// "light" or "dark"
        theme: Theme,
    },
    /// Switch between light and dark
    #[command(aliases(["t"]))]
    Toggle,
}

impl ThemeCommand {
    pub async fn invoke(self, config: &Config) -> anyhow::Result<()> {
        let theme_feature = Provider::new(config).theme_feature();
        let theme = match self {
            ThemeCommand::Get => get(&theme_feature).await,
            ThemeCommand::Set { theme } => set(&theme_feature, theme).await?,
            ThemeCommand::Toggle => toggle(&theme_feature).await?,
        };
        println!("{theme}");
        Ok(())
    }
}

pub async fn get(theme_feature: &impl ThemeFeatureService) -> Theme {
    theme_feature.init().await
}

pub async fn set(theme_feature: &impl ThemeFeatureService, theme: Theme) -> anyhow::Result<Theme> {
    theme_feature.init().await;
    theme_feature.set(theme).await?;
    info!(%theme, "Theme saved");
    Ok(theme)
}

pub async fn toggle(theme_feature: &impl ThemeFeatureService) -> anyhow::Result<Theme> {
    theme_feature.init().await;
    let theme = theme_feature.toggle().await?;
    info!(%theme, "Theme saved");
    Ok(theme)
}
