//! Text and JSON rendering of search results and catalog listings.
use style_data::model::{Catalog, Industry};

use crate::search::SearchResults;

const JSON_DELIMITER: &str = "--- JSON Output ---";
const TOPIC_PREVIEW_LEN: usize = 3;
const PHRASE_PREVIEW_LEN: usize = 5;
const LIST_RULE_WIDTH: usize = 50;

/// Everything a search run prints to stdout: the text block, then the JSON
/// dump when `json` is set.
pub fn render_search(results: &SearchResults, json: bool) -> Result<String, serde_json::Error> {
    let mut out = if results.is_empty() {
        format_no_results(results.query())
    } else {
        format_results(results)
    };

    if json {
        out.push_str("\n\n");
        out.push_str(JSON_DELIMITER);
        out.push('\n');
        out.push_str(&serde_json::to_string_pretty(results)?);
    }
    Ok(out)
}

pub fn format_no_results(query: &str) -> String {
    format!("\n❌ No results found for: '{query}'")
}

pub fn format_results(results: &SearchResults) -> String {
    let mut lines = vec![
        String::new(),
        format!("🔍 Search Results for: '{}'", results.query()),
        format!("   Found {} matches", results.total()),
        String::new(),
    ];
    let mut sections = Sections::default();

    if !results.styles().is_empty() {
        sections.start(&mut lines, "📝 Writing Styles:");
        for item in results.styles() {
            let style = item.data;
            lines.push(format!("   • {}", display_name(&style.name, &style.name_vi)));
            push_detail(&mut lines, &style.description);
        }
    }

    if !results.tones().is_empty() {
        sections.start(&mut lines, "🎭 Tones:");
        for item in results.tones() {
            let tone = item.data;
            lines.push(format!("   • {}", display_name(&tone.name, &tone.name_vi)));
            push_detail(&mut lines, &tone.description);
        }
    }

    if !results.structures().is_empty() {
        sections.start(&mut lines, "📋 Blog Structures:");
        for item in results.structures() {
            let structure = item.data;
            lines.push(format!("   • {}", display_name(&structure.name, &structure.name_vi)));
            let headings = if structure.sections_vi.is_empty() {
                &structure.sections
            } else {
                &structure.sections_vi
            };
            if !headings.is_empty() {
                push_detail(&mut lines, &format!("Sections: {}", headings.join(", ")));
            }
        }
    }

    if !results.industries().is_empty() {
        sections.start(&mut lines, "🏢 Industries:");
        for item in results.industries() {
            let industry = item.data;
            lines.push(format!("   • {}", industry.name));
            if !industry.topics.is_empty() {
                push_detail(
                    &mut lines,
                    &format!("Topics: {}", preview(&industry.topics, TOPIC_PREVIEW_LEN)),
                );
            }
        }
    }

    if !results.blacklist().is_empty() {
        sections.start(&mut lines, "🚫 Blacklist Categories:");
        for item in results.blacklist() {
            let category = item.category.unwrap_or_default();
            let description = &item.data.info.description;
            if description.is_empty() {
                lines.push(format!("   • {category}"));
            } else {
                lines.push(format!("   • {category}: {description}"));
            }
        }
    }

    lines.join("\n")
}

/// Full listing of a catalog, as text or as the catalog's JSON.
pub fn render_listing(catalog: &Catalog, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(catalog)
    } else {
        Ok(format_listing(catalog))
    }
}

pub fn format_listing(catalog: &Catalog) -> String {
    let rule = "─".repeat(LIST_RULE_WIDTH);
    let mut lines = vec![
        String::new(),
        "📚 Blog Style Reference Data".to_string(),
        String::new(),
    ];

    if !catalog.styles.is_empty() {
        lines.push(format!("📝 Writing Styles ({})", catalog.styles.len()));
        lines.push(rule.clone());
        for style in &catalog.styles {
            lines.push(format!("  {:<15} {}", style.id, display_name(&style.name, &style.name_vi)));
            push_column(&mut lines, 15, &style.description);
            if !style.best_for.is_empty() {
                push_column(&mut lines, 15, &format!("Best for: {}", style.best_for.join(", ")));
            }
            lines.push(String::new());
        }
    }

    if !catalog.tones.is_empty() {
        lines.push(format!("🎭 Tone Variations ({})", catalog.tones.len()));
        lines.push(rule.clone());
        for tone in &catalog.tones {
            lines.push(format!("  {:<15} {}", tone.id, display_name(&tone.name, &tone.name_vi)));
            push_column(&mut lines, 15, &tone.description);
            lines.push(String::new());
        }
    }

    if !catalog.structures.is_empty() {
        lines.push(format!("📋 Blog Structures ({})", catalog.structures.len()));
        lines.push(rule.clone());
        for structure in &catalog.structures {
            lines.push(format!(
                "  {:<15} {}",
                structure.id,
                display_name(&structure.name, &structure.name_vi)
            ));
            if !structure.sections_vi.is_empty() {
                push_column(
                    &mut lines,
                    15,
                    &format!("Sections: {}", structure.sections_vi.join(" → ")),
                );
            }
            if !structure.best_for.is_empty() {
                push_column(
                    &mut lines,
                    15,
                    &format!("Best for: {}", structure.best_for.join(", ")),
                );
            }
            lines.push(String::new());
        }
    }

    if !catalog.industries.is_empty() {
        lines.push(format!("🏢 Industry Templates ({})", catalog.industries.len()));
        lines.push(rule.clone());
        for industry in &catalog.industries {
            lines.push(format!("  {:<15} {}", industry.id, industry.name));
            if !industry.topics.is_empty() {
                push_column(
                    &mut lines,
                    15,
                    &format!("Topics: {}", preview(&industry.topics, TOPIC_PREVIEW_LEN)),
                );
            }
            push_column(&mut lines, 15, &tone_line(industry));
            lines.push(String::new());
        }
    }

    if !catalog.blacklist.is_empty() {
        lines.push(format!(
            "🚫 Marketing Blacklist ({} categories)",
            catalog.blacklist.len()
        ));
        lines.push(rule.clone());
        for category in &catalog.blacklist {
            lines.push(
                format!("  {:<20} {}", category.key, category.info.description)
                    .trim_end()
                    .to_string(),
            );
            if !category.info.phrases.is_empty() {
                push_column(
                    &mut lines,
                    20,
                    &format!("Examples: {}", preview(&category.info.phrases, PHRASE_PREVIEW_LEN)),
                );
            }
            lines.push(String::new());
        }
    }

    lines.push(rule);
    lines.push(String::new());
    lines.push("📊 Summary:".to_string());
    lines.push(format!("   • {} Writing Styles", catalog.styles.len()));
    lines.push(format!("   • {} Tone Variations", catalog.tones.len()));
    lines.push(format!("   • {} Blog Structures", catalog.structures.len()));
    lines.push(format!("   • {} Industry Templates", catalog.industries.len()));
    lines.push(format!("   • {} Blacklist Categories", catalog.blacklist.len()));

    lines.join("\n")
}

/// Separates result sections with a blank line, except before the first.
#[derive(Default)]
struct Sections {
    started: bool,
}

impl Sections {
    fn start(&mut self, lines: &mut Vec<String>, header: &str) {
        if self.started {
            lines.push(String::new());
        }
        self.started = true;
        lines.push(header.to_string());
    }
}

fn display_name(name: &str, name_vi: &str) -> String {
    if name_vi.is_empty() {
        name.to_string()
    } else {
        format!("{name} ({name_vi})")
    }
}

fn push_detail(lines: &mut Vec<String>, text: &str) {
    if !text.is_empty() {
        lines.push(format!("     {text}"));
    }
}

fn push_column(lines: &mut Vec<String>, indent: usize, text: &str) {
    if !text.is_empty() {
        lines.push(format!("  {:indent$} {text}", ""));
    }
}

/// First `limit` items joined with commas, with a trailing `...` if any were cut.
fn preview(items: &[String], limit: usize) -> String {
    let shown = items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if items.len() > limit {
        format!("{shown}...")
    } else {
        shown
    }
}

fn tone_line(industry: &Industry) -> String {
    if industry.tone.is_empty() {
        String::new()
    } else {
        format!("Tone: {}", industry.tone)
    }
}
