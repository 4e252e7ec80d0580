use super::config::FilterConfig;
use super::state::FilterState;
use crate::domain::a001_dataset::aggregate::Dataset;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 50;
pub const MAX_PAGE_SIZE: usize = 500;

fn default_sort_field() -> String {
    "name".to_string()
}

fn default_true() -> bool {
    true
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Catalog request issued by the data view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub filters: FilterState,
    #[serde(default = "default_sort_field")]
    pub sort_field: String,
    #[serde(default = "default_true")]
    pub sort_ascending: bool,
    /// Zero-based page index
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for DatasetQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: FilterState::default(),
            sort_field: default_sort_field(),
            sort_ascending: true,
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of matching datasets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetPage {
    pub items: Vec<Dataset>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Search, filter, sort and paginate `records`.
///
/// A page index past the end yields an empty `items` list with the real
/// totals, so the caller can step back.
pub fn apply_query(
    records: Vec<Dataset>,
    query: &DatasetQuery,
    configs: &[FilterConfig],
) -> DatasetPage {
    let page_size = query.page_size.clamp(1, MAX_PAGE_SIZE);

    let mut matched: Vec<Dataset> = records
        .into_iter()
        .filter(|r| !r.metadata.is_deleted)
        .filter(|r| r.matches_search(&query.search))
        .filter(|r| query.filters.matches(r, configs))
        .collect();

    matched.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, &query.sort_field);
        if query.sort_ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });

    let total_count = matched.len();
    let total_pages = total_count.div_ceil(page_size);
    let items = matched
        .into_iter()
        .skip(query.page.saturating_mul(page_size))
        .take(page_size)
        .collect();

    DatasetPage {
        items,
        total_count,
        page: query.page,
        page_size,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_dataset::aggregate::sample_dataset;
    use crate::domain::a001_dataset::filter_configs;

    fn catalog() -> Vec<Dataset> {
        vec![
            sample_dataset("Bilayer twist", "4D-STEM", "EMPAD", 300.0, 2048.0),
            sample_dataset("Perovskite EELS", "EELS Hyperspectral", "Continuum K3-IS", 200.0, 950.0),
            sample_dataset("GaN nanowire CL", "CL Hyperspectral", "Attolight CL Mirror", 80.0, 420.0),
            sample_dataset("Alloy EDS map", "EDS Hyperspectral Map", "Ultra-X EDS", 300.0, 120.0),
            sample_dataset("Catalyst HAADF", "HAADF", "Ceta-S CMOS", 200.0, 15.0),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_sorted() {
        let page = apply_query(catalog(), &DatasetQuery::default(), &filter_configs());
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 1);
        let names: Vec<&str> = page.items.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Alloy EDS map",
                "Bilayer twist",
                "Catalyst HAADF",
                "GaN nanowire CL",
                "Perovskite EELS"
            ]
        );
    }

    #[test]
    fn test_search_and_filters_combine() {
        let mut query = DatasetQuery {
            search: "hyperspectral".into(),
            ..DatasetQuery::default()
        };
        query.filters.set_range("voltage_kv", 150.0, 300.0);

        let page = apply_query(catalog(), &query, &filter_configs());
        let names: Vec<&str> = page.items.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Alloy EDS map", "Perovskite EELS"]);
    }

    #[test]
    fn test_sort_descending_by_size() {
        let query = DatasetQuery {
            sort_field: "file_size_mb".into(),
            sort_ascending: false,
            ..DatasetQuery::default()
        };
        let page = apply_query(catalog(), &query, &filter_configs());
        assert_eq!(page.items[0].name, "Bilayer twist");
        assert_eq!(page.items[4].name, "Catalyst HAADF");
    }

    #[test]
    fn test_pagination() {
        let query = DatasetQuery {
            page: 1,
            page_size: 2,
            ..DatasetQuery::default()
        };
        let page = apply_query(catalog(), &query, &filter_configs());
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Catalyst HAADF");

        let past_end = DatasetQuery {
            page: 7,
            page_size: 2,
            ..DatasetQuery::default()
        };
        let page = apply_query(catalog(), &past_end, &filter_configs());
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn test_page_size_is_clamped() {
        let query = DatasetQuery {
            page_size: 0,
            ..DatasetQuery::default()
        };
        let page = apply_query(catalog(), &query, &filter_configs());
        assert_eq!(page.page_size, 1);
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn test_deleted_records_hidden() {
        let mut records = catalog();
        records[0].metadata.is_deleted = true;
        let page = apply_query(records, &DatasetQuery::default(), &filter_configs());
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn test_query_deserializes_with_defaults() {
        let query: DatasetQuery = serde_json::from_str(r#"{"search":"eels"}"#).unwrap();
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert!(query.sort_ascending);
        assert!(query.filters.is_empty());
    }
}
