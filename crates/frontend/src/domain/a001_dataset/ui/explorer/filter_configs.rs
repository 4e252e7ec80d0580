use contracts::domain::a001_dataset::filter_configs;
use contracts::shared::filters::{validate_filter_configs, FilterConfig};
use once_cell::sync::Lazy;

/// Filters shown on the explorer page, built once per module load
pub static FILTER_CONFIGS: Lazy<Vec<FilterConfig>> = Lazy::new(|| {
    let configs = filter_configs();
    if let Err(e) = validate_filter_configs(&configs) {
        log::warn!("Explorer filter configuration: {}", e);
    }
    configs
});

pub fn explorer_filter_configs() -> &'static [FilterConfig] {
    FILTER_CONFIGS.as_slice()
}
