use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::DataError;

/// One of the five reference collections shipped in the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionKind {
    Style,
    Tone,
    Structure,
    Industry,
    Blacklist,
}

impl CollectionKind {
    /// Display order used everywhere results are rendered.
    pub const ALL: [CollectionKind; 5] = [
        CollectionKind::Style,
        CollectionKind::Tone,
        CollectionKind::Structure,
        CollectionKind::Industry,
        CollectionKind::Blacklist,
    ];

    /// File name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            CollectionKind::Style => "writing-styles.json",
            CollectionKind::Tone => "tone-variations.json",
            CollectionKind::Structure => "blog-structures.json",
            CollectionKind::Industry => "industry-templates.json",
            CollectionKind::Blacklist => "marketing-blacklist.json",
        }
    }

    /// Top-level key wrapping the records in the data file.
    pub fn data_key(self) -> &'static str {
        match self {
            CollectionKind::Style => "styles",
            CollectionKind::Tone => "tones",
            CollectionKind::Structure => "structures",
            CollectionKind::Industry => "industries",
            CollectionKind::Blacklist => "categories",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKind::Style => "style",
            CollectionKind::Tone => "tone",
            CollectionKind::Structure => "structure",
            CollectionKind::Industry => "industry",
            CollectionKind::Blacklist => "blacklist",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionKind {
    type Err = DataError;

    /// Accepts singular or plural names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "style" | "styles" => Ok(CollectionKind::Style),
            "tone" | "tones" => Ok(CollectionKind::Tone),
            "structure" | "structures" => Ok(CollectionKind::Structure),
            "industry" | "industries" => Ok(CollectionKind::Industry),
            "blacklist" | "blacklists" => Ok(CollectionKind::Blacklist),
            _ => Err(DataError::UnknownCollection(s.to_string())),
        }
    }
}

/// A record exactly as it appears in the data file, plus the typed view of
/// the fields this tool reads.
///
/// Serializing a `Record` writes the source object back unchanged (field order,
/// empty values and fields the tool never reads included). The typed view is
/// reachable through `Deref`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<T> {
    fields: T,
    raw: Map<String, Value>,
}

impl<T> Record<T> {
    pub fn fields(&self) -> &T {
        &self.fields
    }

    /// The source object.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }
}

impl<T> Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.fields
    }
}

impl<T> Serialize for Record<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Record<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        let fields = T::deserialize(&Value::Object(raw.clone())).map_err(D::Error::custom)?;
        Ok(Self { fields, raw })
    }
}

/// A writing style (e.g. "Tutorial Walkthrough").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Style {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub name: String,
    /// Vietnamese display name
    pub name_vi: String,
    pub description: String,
    pub characteristics: Vec<String>,
    pub best_for: Vec<String>,
}

/// A tone variation (e.g. "Friendly", "Professional").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tone {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub name: String,
    pub name_vi: String,
    pub description: String,
}

/// A blog post structure, with its ordered section headings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Structure {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    pub name: String,
    pub name_vi: String,
    pub best_for: Vec<String>,
    #[serde(deserialize_with = "lenient_strings")]
    pub sections: Vec<String>,
    /// Vietnamese section headings, in order
    #[serde(deserialize_with = "lenient_strings")]
    pub sections_vi: Vec<String>,
}

/// An industry template with its typical topics and keywords.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Industry {
    pub id: String,
    pub name: String,
    pub topics: Vec<String>,
    pub keywords: Vec<String>,
    /// Recommended tone for the industry, free text
    #[serde(deserialize_with = "lenient_string")]
    pub tone: String,
}

/// Body of a blacklist category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlacklistInfo {
    pub description: String,
    pub phrases: Vec<String>,
}

/// A category of blacklisted marketing phrases. The data file stores
/// categories as a mapping; `key` is the mapping key.
#[derive(Debug, Clone, PartialEq)]
pub struct BlacklistCategory {
    pub key: String,
    pub info: Record<BlacklistInfo>,
}

impl Serialize for BlacklistCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.info.serialize(serializer)
    }
}

/// Every collection loaded for one run. Collections that were not requested,
/// or whose file is missing, are empty.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    pub styles: Vec<Record<Style>>,
    pub tones: Vec<Record<Tone>>,
    pub structures: Vec<Record<Structure>>,
    pub industries: Vec<Record<Industry>>,
    #[serde(serialize_with = "serialize_blacklist")]
    pub blacklist: Vec<BlacklistCategory>,
}

impl Catalog {
    pub fn len(&self, kind: CollectionKind) -> usize {
        match kind {
            CollectionKind::Style => self.styles.len(),
            CollectionKind::Tone => self.tones.len(),
            CollectionKind::Structure => self.structures.len(),
            CollectionKind::Industry => self.industries.len(),
            CollectionKind::Blacklist => self.blacklist.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        CollectionKind::ALL.iter().all(|kind| self.len(*kind) == 0)
    }
}

// Blacklist goes back out in the same keyed shape it came in.
fn serialize_blacklist<S: Serializer>(
    categories: &[BlacklistCategory],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(categories.iter().map(|c| (c.key.as_str(), &c.info)))
}

// Display-only fields: scalars are shown as text, anything else as empty.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_singular_and_plural() {
        assert_eq!("style".parse::<CollectionKind>().unwrap(), CollectionKind::Style);
        assert_eq!("Industries".parse::<CollectionKind>().unwrap(), CollectionKind::Industry);
        assert_eq!(" TONE ".parse::<CollectionKind>().unwrap(), CollectionKind::Tone);
        assert!(matches!(
            "template".parse::<CollectionKind>(),
            Err(DataError::UnknownCollection(s)) if s == "template"
        ));
    }

    #[test]
    fn record_serializes_source_unchanged() {
        let source = r#"{"name":"Friendly","nameVi":"","description":"Warm","id":"friendly","examples":[1,2]}"#;
        let tone: Record<Tone> = serde_json::from_str(source).unwrap();
        assert_eq!(tone.name, "Friendly");
        assert!(tone.name_vi.is_empty());
        assert_eq!(serde_json::to_string(&tone).unwrap(), source);

        let source = r#"{"description":"no name"}"#;
        let tone: Record<Tone> = serde_json::from_str(source).unwrap();
        assert!(tone.name.is_empty());
        assert_eq!(serde_json::to_string(&tone).unwrap(), source);
    }

    #[test]
    fn display_only_fields_are_lenient() {
        let style: Record<Style> =
            serde_json::from_str(r#"{"id": 7, "name": "Tutorial Walkthrough"}"#).unwrap();
        assert_eq!(style.id, "7");

        let industry: Record<Industry> =
            serde_json::from_str(r#"{"id": "saas", "tone": {"primary": "professional"}}"#).unwrap();
        assert!(industry.tone.is_empty());
        assert_eq!(industry.raw()["tone"]["primary"], "professional");

        let structure: Record<Structure> =
            serde_json::from_str(r#"{"name": "Listicle", "sectionsVi": "Mở bài", "sections": ["Intro", 2]}"#)
                .unwrap();
        assert!(structure.sections_vi.is_empty());
        assert_eq!(structure.sections, vec!["Intro".to_string()]);
    }

    #[test]
    fn searched_fields_stay_strict() {
        assert!(serde_json::from_str::<Record<Style>>(r#"{"bestFor": "lists"}"#).is_err());
        assert!(serde_json::from_str::<Record<Industry>>(r#"{"id": 3}"#).is_err());
        assert!(serde_json::from_str::<Record<Tone>>(r#"["Friendly"]"#).is_err());
    }

    #[test]
    fn catalog_serializes_blacklist_as_mapping() {
        let info = |json: &str| serde_json::from_str::<Record<BlacklistInfo>>(json).unwrap();
        let catalog = Catalog {
            blacklist: vec![
                BlacklistCategory {
                    key: "superlatives".to_string(),
                    info: info(r#"{"phrases":["best ever"],"description":"Overblown claims"}"#),
                },
                BlacklistCategory {
                    key: "buzzwords".to_string(),
                    info: info("{}"),
                },
            ],
            ..Default::default()
        };
        let json = serde_json::to_string(&catalog).unwrap();
        assert!(json.contains(r#""blacklist":{"superlatives":{"phrases":["best ever"],"description":"Overblown claims"},"buzzwords":{}}"#));
        assert_eq!(catalog.len(CollectionKind::Blacklist), 2);
        assert!(!catalog.is_empty());
        assert!(Catalog::default().is_empty());
    }
}
