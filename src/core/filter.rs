use crate::domain::model::Package;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DurationBucket {
    /// 3-4 days.
    Short,
    /// 5-7 days.
    Medium,
    /// 8+ days.
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum PriceBucket {
    /// Under 4,000 AED.
    Budget,
    /// 4,000 - 8,000 AED.
    Mid,
    /// 8,000 AED and up.
    Luxury,
}

impl PriceBucket {
    /// Inclusive on the lower bound, exclusive on the upper.
    pub fn contains(self, price: f64) -> bool {
        match self {
            PriceBucket::Budget => price < 4000.0,
            PriceBucket::Mid => (4000.0..8000.0).contains(&price),
            PriceBucket::Luxury => price >= 8000.0,
        }
    }
}

/// User-selected predicates. Empty string / `None` means "no constraint".
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against title or location.
    pub search: String,
    /// Exact match against the package's country.
    pub country: String,
    pub duration: Option<DurationBucket>,
    pub price: Option<PriceBucket>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.country.is_empty()
            && self.duration.is_none()
            && self.price.is_none()
    }
}

/// Applies the active-only predicate plus every non-empty criterion, ANDed.
/// Pure and order-preserving; the input list is never mutated.
pub fn filter_packages(packages: &[Package], criteria: &FilterCriteria) -> Vec<Package> {
    let needle = criteria.search.to_lowercase();

    packages
        .iter()
        .filter(|pkg| pkg.is_listed())
        .filter(|pkg| {
            needle.is_empty()
                || pkg.title.to_lowercase().contains(&needle)
                || pkg.location.to_lowercase().contains(&needle)
        })
        .filter(|pkg| criteria.country.is_empty() || pkg.country == criteria.country)
        .filter(|pkg| {
            criteria
                .duration
                .is_none_or(|bucket| matches_duration(&pkg.duration, bucket))
        })
        .filter(|pkg| criteria.price.is_none_or(|bucket| bucket.contains(pkg.price)))
        .cloned()
        .collect()
}

/// Substring heuristic over the free-text duration, kept verbatim from the
/// observed behavior: ambiguous strings like "13 Days" contain "3" and so
/// also match the short bucket. Not a structured parse.
fn matches_duration(duration: &str, bucket: DurationBucket) -> bool {
    match bucket {
        DurationBucket::Short => duration.contains('3') || duration.contains('4'),
        DurationBucket::Medium => {
            duration.contains('5') || duration.contains('6') || duration.contains('7')
        }
        DurationBucket::Long => leading_int(duration).is_some_and(|days| days >= 8),
    }
}

/// Parses the leading integer of the string, ignoring leading whitespace,
/// e.g. "10 Days / 9 Nights" -> 10. `None` when the text does not start
/// with a digit.
fn leading_int(text: &str) -> Option<i64> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Distinct `country` values of the resolved list in first-seen order, for
/// populating a destination selector.
pub fn distinct_countries(packages: &[Package]) -> Vec<String> {
    let mut countries: Vec<String> = Vec::new();
    for pkg in packages {
        if !countries.contains(&pkg.country) {
            countries.push(pkg.country.clone());
        }
    }
    countries
}
