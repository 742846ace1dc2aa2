use clap::Args;
use folio_config::Config;
use folio_core_pagination_contracts::PaginationService;
use folio_models::pagination::SlotBudget;

use crate::{environment::Provider, render};

#[derive(Debug, Args)]
pub struct PagesCommand {
    /// The current page, clamped into the valid range
    #[arg(allow_negative_numbers = true)]
    current: i64,
    /// The total number of pages
    #[arg(allow_negative_numbers = true)]
    total: i64,
    /// Maximum number of entries to display, defaults to the configured value
    #[arg(long, allow_negative_numbers = true)]
    max_slots: Option<i64>,
    /// Print the controls as json
    #[arg(long)]
    json: bool,
}

impl PagesCommand {
    pub fn invoke(self, config: &Config) -> anyhow::Result<()> {
        let provider = Provider::new(config);
        let pagination = match self.max_slots {
            Some(max_slots) => provider.pagination_with_budget(SlotBudget::from_raw(max_slots)),
            None => provider.pagination(),
        };

        print!("{}", pages(&pagination, self.current, self.total, self.json)?);
        Ok(())
    }
}

pub fn pages(
    pagination: &impl PaginationService,
    current: i64,
    total: i64,
    json: bool,
) -> anyhow::Result<String> {
    let controls = pagination.controls(current, total);
    Ok(if json {
        serde_json::to_string_pretty(&controls)? + "\n"
    } else {
        render::pagination(&controls) + "\n"
    })
}

#[cfg(test)]
mod tests {
    use folio_core_pagination_impl::{PaginationServiceConfig, PaginationServiceImpl};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn text() {
        let sut = PaginationServiceImpl::default();
        assert_eq!(
            pages(&sut, 10, 20, false).unwrap(),
            "‹ 1 … 9 [10] 11 … 20 ›\n"
        );
        assert_eq!(pages(&sut, 42, 0, false).unwrap(), "  [1]  \n");
    }

    #[test]
    fn custom_budget() {
        let sut = PaginationServiceImpl::new(PaginationServiceConfig {
            max_slots: SlotBudget::from_raw(9),
        });
        assert_eq!(
            pages(&sut, 10, 20, false).unwrap(),
            "‹ 1 … 8 9 [10] 11 12 … 20 ›\n"
        );
    }

    #[test]
    fn json() {
        // Act
        let output = pages(&PaginationServiceImpl::default(), 3, 3, true).unwrap();

        // Assert
        let value = serde_json::from_str::<serde_json::Value>(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "position": {"current": 3, "total": 3},
                "previous": {"target": 2},
                "next": {"target": null},
                "pages": [
                    {"type": "page", "page": 1, "current": false},
                    {"type": "page", "page": 2, "current": false},
                    {"type": "page", "page": 3, "current": true},
                ],
            })
        );
    }
}
