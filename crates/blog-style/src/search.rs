//! Case-insensitive substring search across the reference collections.
//!
//! Each record type declares the fields a query is matched against. A record
//! matches when any of those values (or any element of a list field) contains
//! the lower-cased query. Results keep source order; there is no ranking.
use serde::Serialize;
use tracing::debug;

use style_data::model::{
    BlacklistCategory, Catalog, CollectionKind, Industry, Record, Structure, Style, Tone,
};

pub trait Searchable {
    const KIND: CollectionKind;

    /// Values the query is matched against. Absent fields are empty.
    fn search_fields(&self) -> Vec<&str>;

    /// Key of the record within a keyed collection.
    fn category(&self) -> Option<&str> {
        None
    }
}

impl Searchable for Record<Style> {
    const KIND: CollectionKind = CollectionKind::Style;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.name_vi.as_str(),
            self.description.as_str(),
        ];
        fields.extend(self.characteristics.iter().map(String::as_str));
        fields.extend(self.best_for.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Record<Tone> {
    const KIND: CollectionKind = CollectionKind::Tone;

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.name_vi.as_str(),
            self.description.as_str(),
        ]
    }
}

impl Searchable for Record<Structure> {
    const KIND: CollectionKind = CollectionKind::Structure;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.name_vi.as_str()];
        fields.extend(self.best_for.iter().map(String::as_str));
        fields
    }
}

impl Searchable for Record<Industry> {
    const KIND: CollectionKind = CollectionKind::Industry;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.id.as_str()];
        fields.extend(self.topics.iter().map(String::as_str));
        fields.extend(self.keywords.iter().map(String::as_str));
        fields
    }
}

impl Searchable for BlacklistCategory {
    const KIND: CollectionKind = CollectionKind::Blacklist;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.key.as_str(), self.info.description.as_str()];
        fields.extend(self.info.phrases.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(self.key.as_str())
    }
}

/// A record that matched, tagged with the collection it came from.
#[derive(Debug, Serialize)]
pub struct Match<'a, T> {
    #[serde(rename = "type")]
    pub kind: CollectionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
    pub data: &'a T,
}

/// `needle` must already be lower-cased.
pub fn matches<T: Searchable>(record: &T, needle: &str) -> bool {
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

pub fn search_collection<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<Match<'a, T>> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(*record, &needle))
        .map(|record| Match {
            kind: T::KIND,
            category: record.category(),
            data: record,
        })
        .collect()
}

/// Matches for one query across every collection.
///
/// Built once by [`SearchResults::search`]; `total` always equals the sum of
/// the per-collection counts.
#[derive(Debug, Serialize)]
pub struct SearchResults<'a> {
    query: &'a str,
    styles: Vec<Match<'a, Record<Style>>>,
    tones: Vec<Match<'a, Record<Tone>>>,
    structures: Vec<Match<'a, Record<Structure>>>,
    industries: Vec<Match<'a, Record<Industry>>>,
    blacklist: Vec<Match<'a, BlacklistCategory>>,
    total: usize,
}

impl<'a> SearchResults<'a> {
    pub fn search(query: &'a str, catalog: &'a Catalog) -> Self {
        let styles = search_collection(&catalog.styles, query);
        let tones = search_collection(&catalog.tones, query);
        let structures = search_collection(&catalog.structures, query);
        let industries = search_collection(&catalog.industries, query);
        let blacklist = search_collection(&catalog.blacklist, query);

        let total =
            styles.len() + tones.len() + structures.len() + industries.len() + blacklist.len();
        debug!(
            query,
            styles = styles.len(),
            tones = tones.len(),
            structures = structures.len(),
            industries = industries.len(),
            blacklist = blacklist.len(),
            "search passes complete"
        );

        Self {
            query,
            styles,
            tones,
            structures,
            industries,
            blacklist,
            total,
        }
    }

    pub fn query(&self) -> &str {
        self.query
    }

    pub fn styles(&self) -> &[Match<'a, Record<Style>>] {
        &self.styles
    }

    pub fn tones(&self) -> &[Match<'a, Record<Tone>>] {
        &self.tones
    }

    pub fn structures(&self) -> &[Match<'a, Record<Structure>>] {
        &self.structures
    }

    pub fn industries(&self) -> &[Match<'a, Record<Industry>>] {
        &self.industries
    }

    pub fn blacklist(&self) -> &[Match<'a, BlacklistCategory>] {
        &self.blacklist
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    fn records<T: serde::de::DeserializeOwned>(json: &str) -> Vec<T> {
        serde_json::from_str(json).unwrap()
    }

    pub(crate) fn sample_catalog() -> Catalog {
        let blacklist: serde_json::Map<String, serde_json::Value> = serde_json::from_str(
            r#"{
                "superlatives": {"description": "Overblown claims", "phrases": ["best-in-class", "world-class"]},
                "buzzwords": {"description": "Empty jargon", "phrases": ["synergy", "SaaS-powered"]}
            }"#,
        )
        .unwrap();

        Catalog {
            styles: records(
                r#"[
                {"id": "tutorial", "name": "Tutorial Walkthrough", "nameVi": "Hướng dẫn từng bước",
                 "description": "Step-by-step tutorial guide",
                 "characteristics": ["numbered steps", "screenshots"], "bestFor": ["how-to articles"]},
                {"id": "style-01", "name": "Storytelling", "nameVi": "Kể chuyện",
                 "description": "Narrative driven posts", "bestFor": ["SaaS case studies"]}
            ]"#,
            ),
            tones: records(
                r#"[
                {"id": "friendly", "name": "Friendly", "nameVi": "Thân thiện", "description": "Warm and approachable"},
                {"id": "tone-01", "name": "Formal", "description": "Precise and reserved"}
            ]"#,
            ),
            structures: records(
                r#"[
                {"id": "listicle", "name": "Listicle", "nameVi": "Danh sách",
                 "bestFor": ["quick tips", "tutorial roundups"],
                 "sectionsVi": ["Mở bài", "Danh sách", "Kết luận"]}
            ]"#,
            ),
            industries: records(
                r#"[
                {"id": "saas", "name": "Software as a Service",
                 "topics": ["onboarding", "pricing", "churn", "integrations"],
                 "keywords": ["subscription", "user-friendly"]},
                {"id": "finance", "name": "Finance", "topics": ["budgeting"]}
            ]"#,
            ),
            blacklist: blacklist
                .into_iter()
                .map(|(key, info)| BlacklistCategory {
                    key,
                    info: serde_json::from_value(info).unwrap(),
                })
                .collect(),
        }
    }

    fn sum_of_counts(results: &SearchResults) -> usize {
        results.styles().len()
            + results.tones().len()
            + results.structures().len()
            + results.industries().len()
            + results.blacklist().len()
    }

    #[test]
    fn tutorial_matches_style_once() {
        let catalog = sample_catalog();
        let results = SearchResults::search("tutorial", &catalog);

        assert_eq!(results.styles().len(), 1);
        assert_eq!(results.styles()[0].data.name, "Tutorial Walkthrough");
        // list-field element match
        assert_eq!(results.structures().len(), 1);
        assert_eq!(results.total(), 2);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = sample_catalog();
        let upper = SearchResults::search("SAAS", &catalog);
        let lower = SearchResults::search("saas", &catalog);

        assert_eq!(
            serde_json::to_value(upper.industries()).unwrap(),
            serde_json::to_value(lower.industries()).unwrap()
        );
        assert_eq!(upper.total(), lower.total());
        // style bestFor, industry id, blacklist phrase
        assert_eq!(lower.styles().len(), 1);
        assert_eq!(lower.industries().len(), 1);
        assert_eq!(lower.blacklist().len(), 1);
        assert_eq!(lower.total(), 3);
    }

    #[test]
    fn friendly_matches_tone_and_industry_keyword() {
        let catalog = sample_catalog();
        let results = SearchResults::search("friendly", &catalog);

        assert_eq!(results.tones().len(), 1);
        assert_eq!(results.tones()[0].data.name, "Friendly");
        assert_eq!(results.industries().len(), 1);
        assert_eq!(results.industries()[0].data.id, "saas");
        assert_eq!(results.total(), 2);
        assert_eq!(results.total(), sum_of_counts(&results));
    }

    #[test]
    fn unknown_query_has_no_matches() {
        let catalog = sample_catalog();
        let results = SearchResults::search("zzz-nonexistent", &catalog);
        assert!(results.is_empty());
        assert_eq!(results.total(), 0);
    }

    #[test]
    fn total_is_sum_of_counts() {
        let catalog = sample_catalog();
        for query in ["a", "e", "tutorial", "saas", "class", "Mở", "-", "zzz"] {
            let results = SearchResults::search(query, &catalog);
            assert_eq!(results.total(), sum_of_counts(&results), "query: {query}");
        }
    }

    #[test]
    fn blacklist_matches_on_key_and_carry_category() {
        let catalog = sample_catalog();
        let results = SearchResults::search("BUZZ", &catalog);

        assert_eq!(results.blacklist().len(), 1);
        let hit = &results.blacklist()[0];
        assert_eq!(hit.category, Some("buzzwords"));
        assert_eq!(hit.kind, CollectionKind::Blacklist);
    }

    #[test]
    fn unsearched_fields_do_not_match() {
        let catalog = sample_catalog();
        // style and tone ids are not searchable, industry ids are
        assert!(SearchResults::search("01", &catalog).is_empty());
        // structure section headings are display-only
        assert!(SearchResults::search("Kết luận", &catalog).is_empty());
        assert_eq!(SearchResults::search("churn", &catalog).industries().len(), 1);
    }

    #[test]
    fn results_keep_source_order() {
        let catalog = sample_catalog();
        let results = SearchResults::search("class", &catalog);
        let keys: Vec<_> = results.blacklist().iter().map(|m| m.category).collect();
        assert_eq!(keys, vec![Some("superlatives")]);

        let results = SearchResults::search("r", &catalog);
        let names: Vec<&str> = results.tones().iter().map(|m| m.data.name.as_str()).collect();
        assert_eq!(names, ["Friendly", "Formal"]);
    }

    #[test]
    fn match_data_is_the_source_record() {
        let source = r#"{"name":"Friendly","nameVi":"","description":"Warm","id":"friendly","level":3}"#;
        let catalog = Catalog {
            tones: records(&format!("[{source}]")),
            ..Default::default()
        };
        let results = SearchResults::search("warm", &catalog);
        assert_eq!(serde_json::to_string(results.tones()[0].data).unwrap(), source);

        let source = r#"{"description":"no name"}"#;
        let catalog = Catalog {
            tones: records(&format!("[{source}]")),
            ..Default::default()
        };
        let results = SearchResults::search("no name", &catalog);
        assert_eq!(serde_json::to_string(results.tones()[0].data).unwrap(), source);
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        let catalog = Catalog::default();
        let results = SearchResults::search("tutorial", &catalog);
        assert!(results.is_empty());
    }

    #[test]
    fn match_serializes_with_type_tag() {
        let catalog = sample_catalog();
        let results = SearchResults::search("synergy", &catalog);
        let json = serde_json::to_value(&results).unwrap();

        assert_eq!(json["query"], "synergy");
        assert_eq!(json["total"], 1);
        assert_eq!(json["blacklist"][0]["type"], "blacklist");
        assert_eq!(json["blacklist"][0]["category"], "buzzwords");
        assert_eq!(json["blacklist"][0]["data"]["description"], "Empty jargon");
        assert!(json["styles"].as_array().unwrap().is_empty());
    }
}
