use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use style_data::model::CollectionKind;

#[derive(Debug, Parser)]
#[command(name = "blog-style", version)]
#[command(
    about = "Search writing styles, tones, blog structures, industry templates and the marketing blacklist"
)]
pub struct Cli {
    /// Search terms, joined with spaces into one query
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Also print the full results as JSON after the text output
    #[arg(short, long)]
    pub json: bool,

    /// Only search (or list) one collection: style, tone, structure, industry or blacklist
    #[arg(short = 't', long = "type", value_name = "KIND")]
    pub kind: Option<CollectionKind>,

    /// List every record instead of searching
    #[arg(short, long, conflicts_with = "query")]
    pub list: bool,

    /// Directory holding the reference JSON files (overrides BLOG_STYLE_DATA_DIR)
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// The query as typed, or `None` if there is nothing to search for.
    pub fn query(&self) -> Option<String> {
        let query = self.query.join(" ");
        if query.trim().is_empty() {
            None
        } else {
            Some(query)
        }
    }

    pub fn kinds(&self) -> Vec<CollectionKind> {
        match self.kind {
            Some(kind) => vec![kind],
            None => CollectionKind::ALL.to_vec(),
        }
    }
}

pub fn usage() -> String {
    format!(
        "{}\nExample: blog-style tutorial\n         blog-style saas --json\n         blog-style friendly --type tone",
        Cli::command().render_usage()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_query_terms() {
        let cli = Cli::try_parse_from(["blog-style", "step", "by", "step", "--json"]).unwrap();
        assert_eq!(cli.query().as_deref(), Some("step by step"));
        assert!(cli.json);
        assert_eq!(cli.kinds(), CollectionKind::ALL.to_vec());
    }

    #[test]
    fn blank_query_is_none() {
        let cli = Cli::try_parse_from(["blog-style"]).unwrap();
        assert!(cli.query().is_none());

        let cli = Cli::try_parse_from(["blog-style", "  ", ""]).unwrap();
        assert!(cli.query().is_none());
    }

    #[test]
    fn type_filter_accepts_plural() {
        let cli = Cli::try_parse_from(["blog-style", "saas", "-t", "industries"]).unwrap();
        assert_eq!(cli.kinds(), vec![CollectionKind::Industry]);
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(Cli::try_parse_from(["blog-style", "saas", "--type", "template"]).is_err());
    }

    #[test]
    fn list_conflicts_with_query() {
        assert!(Cli::try_parse_from(["blog-style", "--list", "saas"]).is_err());
        let cli = Cli::try_parse_from(["blog-style", "--list", "--type", "tone"]).unwrap();
        assert!(cli.list);
    }

    #[test]
    fn usage_names_the_binary() {
        assert!(usage().contains("blog-style"));
    }
}
