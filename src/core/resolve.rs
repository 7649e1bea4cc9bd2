use crate::domain::model::{FetchOutcome, Package};

/// The list chosen for display plus whether it came from the bundled
/// fallback catalog rather than the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub packages: Vec<Package>,
    pub using_fallback: bool,
}

/// Identifies one fetch attempt. Only the most recently issued ticket for a
/// query key may record its outcome; late responses from superseded fetches
/// are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// Per-query-key session state: the last successful list plus the fetch
/// generation counter. An explicit state cell passed around by the caller,
/// never ambient global state. Single writer per key: only `record` mutates
/// it, only `resolve` reads it.
#[derive(Debug, Default)]
pub struct QueryState {
    last_success: Option<Vec<Package>>,
    issued: u64,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the start of a fetch cycle and supersedes any still-pending
    /// earlier fetch for this key.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket {
            generation: self.issued,
        }
    }

    /// Records a fetch outcome. Returns `false` when the ticket was
    /// superseded by a newer fetch, in which case the outcome must be
    /// dropped by the caller.
    pub fn record(&mut self, ticket: FetchTicket, outcome: &FetchOutcome) -> bool {
        if ticket.generation != self.issued {
            tracing::debug!(
                stale = ticket.generation,
                current = self.issued,
                "discarding outcome of superseded fetch"
            );
            return false;
        }
        if let FetchOutcome::Success(packages) = outcome {
            self.last_success = Some(packages.clone());
        }
        true
    }

    pub fn has_succeeded(&self) -> bool {
        self.last_success.is_some()
    }

    /// Decides which list is authoritative for display:
    ///
    /// - `Pending`: the last successful list if any, otherwise empty.
    /// - `Success`: that list, even when empty. An empty catalog is
    ///   authoritative and must never be masked by fallback data.
    /// - `Failure` before any success: the fallback catalog.
    /// - `Failure` after a success: the stale-but-real last list. Once real
    ///   data has been seen, fallback never silently reappears.
    pub fn resolve(&self, outcome: &FetchOutcome, fallback: &[Package]) -> Resolution {
        match outcome {
            FetchOutcome::Pending => Resolution {
                packages: self.last_success.clone().unwrap_or_default(),
                using_fallback: false,
            },
            FetchOutcome::Success(packages) => Resolution {
                packages: packages.clone(),
                using_fallback: false,
            },
            FetchOutcome::Failure(_) => match &self.last_success {
                Some(previous) => Resolution {
                    packages: previous.clone(),
                    using_fallback: false,
                },
                None => Resolution {
                    packages: fallback.to_vec(),
                    using_fallback: true,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pkg(id: &str) -> Package {
        Package {
            id: id.to_string(),
            title: format!("Package {}", id),
            location: "Bali".to_string(),
            country: "Indonesia".to_string(),
            duration: "7 Days / 6 Nights".to_string(),
            price: 4999.0,
            rating: 4.9,
            tag: None,
            slots: None,
            description: String::new(),
            inclusions: vec![],
            is_active: None,
            featured: false,
        }
    }

    fn ids(resolution: &Resolution) -> Vec<&str> {
        resolution.packages.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_pending_without_prior_success_is_empty() {
        let state = QueryState::new();
        let fallback = vec![pkg("f1")];

        let resolution = state.resolve(&FetchOutcome::Pending, &fallback);

        assert!(resolution.packages.is_empty());
        assert!(!resolution.using_fallback);
    }

    #[test]
    fn test_pending_after_success_keeps_last_list() {
        let mut state = QueryState::new();
        let ticket = state.begin_fetch();
        state.record(ticket, &FetchOutcome::Success(vec![pkg("x")]));

        let resolution = state.resolve(&FetchOutcome::Pending, &[pkg("f1")]);

        assert_eq!(ids(&resolution), vec!["x"]);
        assert!(!resolution.using_fallback);
    }

    #[test]
    fn test_success_is_authoritative() {
        let state = QueryState::new();
        let resolution = state.resolve(&FetchOutcome::Success(vec![pkg("a"), pkg("b")]), &[pkg("f1")]);

        assert_eq!(ids(&resolution), vec!["a", "b"]);
        assert!(!resolution.using_fallback);
    }

    #[test]
    fn test_empty_success_never_falls_back() {
        let state = QueryState::new();
        let fallback = vec![pkg("f1"), pkg("f2")];

        let resolution = state.resolve(&FetchOutcome::Success(vec![]), &fallback);

        assert!(resolution.packages.is_empty());
        assert!(!resolution.using_fallback);
    }

    #[test]
    fn test_failure_without_prior_success_uses_fallback() {
        let state = QueryState::new();
        let fallback = vec![pkg("f1")];

        let resolution = state.resolve(&FetchOutcome::Failure("boom".to_string()), &fallback);

        assert_eq!(ids(&resolution), vec!["f1"]);
        assert!(resolution.using_fallback);
    }

    #[test]
    fn test_failure_after_success_prefers_stale_real_data() {
        let mut state = QueryState::new();
        let ticket = state.begin_fetch();
        assert!(state.record(ticket, &FetchOutcome::Success(vec![pkg("real")])));

        let resolution = state.resolve(&FetchOutcome::Failure("boom".to_string()), &[pkg("f1")]);

        assert_eq!(ids(&resolution), vec!["real"]);
        assert!(!resolution.using_fallback);
    }

    #[test]
    fn test_superseded_outcome_is_discarded() {
        let mut state = QueryState::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(state.record(second, &FetchOutcome::Success(vec![pkg("new")])));
        // The first fetch resolves late; its outcome must not overwrite the
        // newer state.
        assert!(!state.record(first, &FetchOutcome::Success(vec![pkg("old")])));

        let resolution = state.resolve(&FetchOutcome::Pending, &[]);
        assert_eq!(ids(&resolution), vec!["new"]);
    }

    #[test]
    fn test_recorded_failure_does_not_erase_last_success() {
        let mut state = QueryState::new();
        let ticket = state.begin_fetch();
        state.record(ticket, &FetchOutcome::Success(vec![pkg("kept")]));

        let later = state.begin_fetch();
        assert!(state.record(later, &FetchOutcome::Failure("down".to_string())));
        assert!(state.has_succeeded());

        let resolution = state.resolve(&FetchOutcome::Failure("down".to_string()), &[pkg("f1")]);
        assert_eq!(ids(&resolution), vec!["kept"]);
        assert!(!resolution.using_fallback);
    }
}
