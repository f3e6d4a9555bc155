//! Grouped descriptive statistics over scored speech records.

pub mod ordering;
pub mod summary;

pub use ordering::{sorted_entries, SummaryOrder};
pub use summary::GroupSummary;

use std::fmt;

use rustc_hash::FxHashMap;

use rhetor_core::types::{Category, Country, SpeechRecord};

/// The grouping dimension for a summary pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupBy {
    Category,
    Country,
    Speaker,
    Year,
}

impl GroupBy {
    pub fn all() -> &'static [GroupBy] {
        &[
            GroupBy::Category,
            GroupBy::Country,
            GroupBy::Speaker,
            GroupBy::Year,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            GroupBy::Category => "category",
            GroupBy::Country => "country",
            GroupBy::Speaker => "speaker",
            GroupBy::Year => "year",
        }
    }
}

/// A typed group key. Within one summary map all keys share the variant
/// selected by the `GroupBy`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKey {
    Category(Category),
    Country(Country),
    Speaker(String),
    Year(u16),
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Category(category) => f.write_str(category.name()),
            GroupKey::Country(country) => f.write_str(country.name()),
            GroupKey::Speaker(speaker) => f.write_str(speaker),
            GroupKey::Year(year) => write!(f, "{year}"),
        }
    }
}

/// Groups scored records and summarizes each group.
pub struct Aggregator;

impl Aggregator {
    /// Pure function of its input: bucket records by the grouping key,
    /// then summarize each bucket. Groups with zero records cannot
    /// appear (keys only exist where a record produced them), so the
    /// output never contains NaN statistics. An empty input yields an
    /// empty map.
    pub fn summarize(
        records: &[SpeechRecord],
        group_by: GroupBy,
    ) -> FxHashMap<GroupKey, GroupSummary> {
        let mut buckets: FxHashMap<GroupKey, Vec<f64>> = FxHashMap::default();
        for record in records {
            let key = match group_by {
                GroupBy::Category => GroupKey::Category(record.category),
                GroupBy::Country => GroupKey::Country(record.country),
                GroupBy::Speaker => GroupKey::Speaker(record.speaker.clone()),
                GroupBy::Year => GroupKey::Year(record.year),
            };
            buckets.entry(key).or_default().push(record.sentiment_score);
        }

        let mut out = FxHashMap::default();
        for (key, scores) in buckets {
            if let Some(summary) = GroupSummary::from_scores(&scores) {
                out.insert(key, summary);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rhetor_core::types::{Category, Country};

    fn record(speaker: &str, category: Category, year: u16, score: f64) -> SpeechRecord {
        SpeechRecord {
            speech_id: format!("{}_{}", speaker.to_lowercase(), year),
            speaker: speaker.to_string(),
            category,
            country: Country::Uk,
            year,
            sentiment_score: score,
        }
    }

    #[test]
    fn test_summarize_buckets_by_category() {
        let records = vec![
            record("A", Category::Populist, 2016, 0.2),
            record("B", Category::Populist, 2017, 0.4),
            record("C", Category::Mainstream, 2016, -0.1),
        ];
        let map = Aggregator::summarize(&records, GroupBy::Category);
        assert_eq!(map.len(), 2);
        let populist = &map[&GroupKey::Category(Category::Populist)];
        assert_eq!(populist.n, 2);
        assert!((populist.mean - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_summarize_empty_input_is_empty_map() {
        let map = Aggregator::summarize(&[], GroupBy::Speaker);
        assert!(map.is_empty());
    }

    #[test]
    fn test_group_key_display() {
        assert_eq!(GroupKey::Category(Category::Populist).to_string(), "populist");
        assert_eq!(GroupKey::Country(Country::Usa).to_string(), "USA");
        assert_eq!(GroupKey::Year(2016).to_string(), "2016");
        assert_eq!(GroupKey::Speaker("Farage".into()).to_string(), "Farage");
    }
}
