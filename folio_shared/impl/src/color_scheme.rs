use folio_models::theme::Theme;
use folio_shared_contracts::color_scheme::ColorSchemeService;
use tracing::debug;

pub const COLOR_SCHEME_VAR: &str = "FOLIO_COLOR_SCHEME";
pub const COLORFGBG_VAR: &str = "COLORFGBG";

/// Derives the preferred colour scheme from environment variables captured
/// at construction time.
#[derive(Debug, Clone, Default)]
pub struct ColorSchemeServiceImpl {
    color_scheme: Option<String>,
    colorfgbg: Option<String>,
}

impl ColorSchemeServiceImpl {
    pub fn new(color_scheme: Option<String>, colorfgbg: Option<String>) -> Self {
        Self {
            color_scheme,
            colorfgbg,
        }
    }

    pub fn from_env() -> Self {
        Self::new(
            std::env::var(COLOR_SCHEME_VAR).ok(),
            std::env::var(COLORFGBG_VAR).ok(),
        )
    }
}

impl ColorSchemeService for ColorSchemeServiceImpl {
    #[tracing::instrument(skip(self))]
    fn preferred_theme(&self) -> Option<Theme> {
        if let Some(raw) = self.color_scheme.as_deref() {
            match raw.parse() {
                Ok(theme) => return Some(theme),
                Err(err) => debug!("ignoring {COLOR_SCHEME_VAR}: {err}"),
            }
        }

        self.colorfgbg.as_deref().and_then(parse_colorfgbg)
    }
}

/// Interprets the `fg;bg` (or `fg;default;bg`) convention used by rxvt and
/// friends. Only the standard 16 colour background indices are recognized.
fn parse_colorfgbg(raw: &str) -> Option<Theme> {
    let background = raw.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    match background {
        7 | 15 => Some(Theme::Light),
        0..=6 | 8 => Some(Theme::Dark),
        _ => None,
    }
}
