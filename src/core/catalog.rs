use crate::core::filter::{distinct_countries, filter_packages, FilterCriteria};
use crate::core::resolve::QueryState;
use crate::domain::model::{FetchOutcome, Package};
use crate::domain::ports::PackageSource;

/// Session-level query keys. "All packages" and "featured packages" are
/// independent fetch cycles with independent last-success state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKey {
    All,
    Featured,
}

impl QueryKey {
    fn featured_param(self) -> Option<bool> {
        match self {
            QueryKey::All => None,
            QueryKey::Featured => Some(true),
        }
    }
}

/// What the presentation layer gets to render: the resolved list, whether
/// it is fallback data, the filtered view of it, the destination selector
/// options, and the last fetch error for the advisory banner.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSnapshot {
    pub packages: Vec<Package>,
    pub using_fallback: bool,
    pub filtered: Vec<Package>,
    pub countries: Vec<String>,
    pub last_error: Option<String>,
}

#[derive(Debug, Default)]
struct QueryCell {
    state: QueryState,
    outcome: FetchOutcome,
}

/// Orchestrates fetch cycles against a [`PackageSource`] and resolves each
/// outcome against the per-key session state and the fallback catalog.
/// Single logical consumer per key; supersession of in-flight fetches is
/// enforced through [`QueryState`] tickets.
pub struct CatalogView<S: PackageSource> {
    source: S,
    fallback: Vec<Package>,
    criteria: FilterCriteria,
    all: QueryCell,
    featured: QueryCell,
}

impl<S: PackageSource> CatalogView<S> {
    pub fn new(source: S, fallback: Vec<Package>) -> Self {
        Self {
            source,
            fallback,
            criteria: FilterCriteria::default(),
            all: QueryCell::default(),
            featured: QueryCell::default(),
        }
    }

    /// Replaces the filter criteria. Only changes what `snapshot` computes;
    /// never triggers a refetch.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Runs one fetch cycle for the key and returns the snapshot after the
    /// outcome has been recorded. A late outcome of a fetch superseded by a
    /// newer `refresh` is discarded rather than overwriting newer state.
    pub async fn refresh(&mut self, key: QueryKey) -> CatalogSnapshot {
        let ticket = self.cell_mut(key).state.begin_fetch();

        tracing::debug!(?key, "fetching packages");
        let outcome = FetchOutcome::from(self.source.packages(key.featured_param()).await);

        match &outcome {
            FetchOutcome::Success(packages) => {
                tracing::info!(?key, count = packages.len(), "fetched packages")
            }
            FetchOutcome::Failure(msg) => tracing::warn!(?key, error = %msg, "fetch failed"),
            FetchOutcome::Pending => {}
        }

        let cell = self.cell_mut(key);
        if cell.state.record(ticket, &outcome) {
            cell.outcome = outcome;
        }

        self.snapshot(key)
    }

    /// Resolves the key's latest accepted outcome and applies the current
    /// filter criteria. Pure read; recomputable at any time.
    pub fn snapshot(&self, key: QueryKey) -> CatalogSnapshot {
        let cell = self.cell(key);
        let fallback = self.fallback_for(key);
        let resolution = cell.state.resolve(&cell.outcome, &fallback);

        let filtered = filter_packages(&resolution.packages, &self.criteria);
        let countries = distinct_countries(&resolution.packages);
        let last_error = match &cell.outcome {
            FetchOutcome::Failure(msg) => Some(msg.clone()),
            _ => None,
        };

        CatalogSnapshot {
            packages: resolution.packages,
            using_fallback: resolution.using_fallback,
            filtered,
            countries,
            last_error,
        }
    }

    fn cell(&self, key: QueryKey) -> &QueryCell {
        match key {
            QueryKey::All => &self.all,
            QueryKey::Featured => &self.featured,
        }
    }

    fn cell_mut(&mut self, key: QueryKey) -> &mut QueryCell {
        match key {
            QueryKey::All => &mut self.all,
            QueryKey::Featured => &mut self.featured,
        }
    }

    /// The featured query falls back to the featured subset of the bundled
    /// catalog, mirroring what the landing page shows.
    fn fallback_for(&self, key: QueryKey) -> Vec<Package> {
        match key {
            QueryKey::All => self.fallback.clone(),
            QueryKey::Featured => self
                .fallback
                .iter()
                .filter(|pkg| pkg.featured)
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::PriceBucket;
    use crate::utils::error::{CatalogError, Result};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    fn pkg(id: &str, price: f64, featured: bool) -> Package {
        Package {
            id: id.to_string(),
            title: format!("Package {}", id),
            location: "Dubai".to_string(),
            country: "UAE".to_string(),
            duration: "4 Days / 3 Nights".to_string(),
            price,
            rating: 4.7,
            tag: None,
            slots: None,
            description: String::new(),
            inclusions: vec![],
            is_active: None,
            featured,
        }
    }

    /// Pops one pre-scripted response per call.
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<Vec<Package>>>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<Vec<Package>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
            }
        }
    }

    #[async_trait]
    impl PackageSource for ScriptedSource {
        async fn packages(&self, _featured: Option<bool>) -> Result<Vec<Package>> {
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("scripted source exhausted")
        }
    }

    fn unreachable() -> CatalogError {
        CatalogError::Unreachable {
            origin: "http://localhost:3001/api".to_string(),
        }
    }

    #[tokio::test]
    async fn test_initial_snapshot_is_empty_and_not_fallback() {
        let source = ScriptedSource::new(vec![]);
        let view = CatalogView::new(source, vec![pkg("f1", 1000.0, true)]);

        let snapshot = view.snapshot(QueryKey::All);

        assert!(snapshot.packages.is_empty());
        assert!(!snapshot.using_fallback);
        assert!(snapshot.last_error.is_none());
    }

    #[tokio::test]
    async fn test_refresh_failure_before_any_success_serves_fallback() {
        let source = ScriptedSource::new(vec![Err(unreachable())]);
        let mut view = CatalogView::new(source, vec![pkg("f1", 1000.0, true)]);

        let snapshot = view.refresh(QueryKey::All).await;

        assert!(snapshot.using_fallback);
        assert_eq!(snapshot.packages[0].id, "f1");
        assert!(snapshot.last_error.unwrap().contains("cannot reach backend API"));
    }

    #[tokio::test]
    async fn test_refresh_failure_after_success_keeps_stale_data() {
        let source = ScriptedSource::new(vec![
            Ok(vec![pkg("real", 2000.0, false)]),
            Err(unreachable()),
        ]);
        let mut view = CatalogView::new(source, vec![pkg("f1", 1000.0, true)]);

        let first = view.refresh(QueryKey::All).await;
        assert_eq!(first.packages[0].id, "real");
        assert!(!first.using_fallback);

        let second = view.refresh(QueryKey::All).await;
        assert_eq!(second.packages[0].id, "real");
        assert!(!second.using_fallback);
        assert!(second.last_error.is_some());
    }

    #[tokio::test]
    async fn test_empty_success_is_not_fallback() {
        let source = ScriptedSource::new(vec![Ok(vec![])]);
        let mut view = CatalogView::new(source, vec![pkg("f1", 1000.0, true)]);

        let snapshot = view.refresh(QueryKey::All).await;

        assert!(snapshot.packages.is_empty());
        assert!(!snapshot.using_fallback);
    }

    #[tokio::test]
    async fn test_featured_fallback_is_featured_subset() {
        let source = ScriptedSource::new(vec![Err(unreachable())]);
        let fallback = vec![pkg("f1", 1000.0, true), pkg("f2", 2000.0, false)];
        let mut view = CatalogView::new(source, fallback);

        let snapshot = view.refresh(QueryKey::Featured).await;

        assert!(snapshot.using_fallback);
        assert_eq!(snapshot.packages.len(), 1);
        assert_eq!(snapshot.packages[0].id, "f1");
    }

    #[tokio::test]
    async fn test_query_keys_have_independent_state() {
        let source = ScriptedSource::new(vec![
            Ok(vec![pkg("all", 2000.0, false)]),
            Err(unreachable()),
        ]);
        let fallback = vec![pkg("f1", 1000.0, true)];
        let mut view = CatalogView::new(source, fallback);

        let all = view.refresh(QueryKey::All).await;
        assert!(!all.using_fallback);

        // The featured key has never succeeded, so its failure falls back
        // even though the all-key holds real data.
        let featured = view.refresh(QueryKey::Featured).await;
        assert!(featured.using_fallback);
    }

    #[tokio::test]
    async fn test_criteria_change_recomputes_without_refetch() {
        let source = ScriptedSource::new(vec![Ok(vec![
            pkg("cheap", 3999.0, false),
            pkg("dear", 9000.0, false),
        ])]);
        let mut view = CatalogView::new(source, vec![]);

        view.refresh(QueryKey::All).await;
        view.set_criteria(FilterCriteria {
            price: Some(PriceBucket::Budget),
            ..Default::default()
        });

        // ScriptedSource would panic on a second fetch; snapshot must not
        // touch the source.
        let snapshot = view.snapshot(QueryKey::All);
        assert_eq!(snapshot.filtered.len(), 1);
        assert_eq!(snapshot.filtered[0].id, "cheap");
        assert_eq!(snapshot.packages.len(), 2);
        assert_eq!(snapshot.countries, vec!["UAE"]);
    }
}
