use clap::{Parser, Subcommand};
use qname_core::{ParseHint, QualifiedName, WildcardPattern};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "qname")]
#[command(about = "Parse, render and match catalog qualified names", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Parse a `/`-delimited name and print its structured form as JSON
    Parse {
        name: String,

        /// Read a fourth segment as a view even when it contains '='
        #[arg(long, default_value_t = false)]
        prefer_view: bool,
    },

    /// Build a name from a JSON object and print its canonical form
    FromJson { json: String },

    /// Print the wildcard pattern for the given filters
    Wildcard {
        #[arg(short, long)]
        source: Option<String>,

        #[arg(short, long)]
        database: Option<String>,

        #[arg(short, long)]
        table: Option<String>,
    },

    /// Print the names whose canonical form matches a '%' pattern
    Match {
        pattern: String,

        #[arg(required = true)]
        names: Vec<String>,
    },
}

/// コマンドを 1 件実行し、標準出力に書く行を返す
fn run(command: Command) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    match command {
        Command::Parse { name, prefer_view } => {
            let name = QualifiedName::parse(&name, ParseHint::from(prefer_view))?;
            debug!(%name, level = %name.level(), "parsed");
            Ok(vec![serde_json::to_string_pretty(&name)?])
        }
        Command::FromJson { json } => {
            let node: serde_json::Value = serde_json::from_str(&json)?;
            let name = QualifiedName::from_structured(&node)?;
            Ok(vec![name.to_string()])
        }
        Command::Wildcard {
            source,
            database,
            table,
        } => {
            let pattern = QualifiedName::to_wildcard_string(
                source.as_deref(),
                database.as_deref(),
                table.as_deref(),
            );
            Ok(vec![pattern.unwrap_or_else(|| "no filter".to_owned())])
        }
        Command::Match { pattern, names } => {
            let pattern = WildcardPattern::new(pattern);
            let mut matched = Vec::new();
            for raw in names {
                let name: QualifiedName = raw.parse()?;
                if pattern.matches(&name) {
                    matched.push(name.to_string());
                } else {
                    debug!(%name, %pattern, "no match");
                }
            }
            Ok(matched)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let args = Args::parse();
    match run(args.command) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "command failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_prints_structured_json() {
        let lines = run(Command::Parse {
            name: "Prod/DB/t/a=b".to_owned(),
            prefer_view: true,
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["viewName"], "a=b");
        assert_eq!(value["qualifiedName"], "prod/db/t/a=b");
    }

    #[test]
    fn parse_rejects_blank_names() {
        let result = run(Command::Parse {
            name: "  ".to_owned(),
            prefer_view: false,
        });
        assert!(result.is_err());
    }

    #[test]
    fn from_json_prints_canonical_name() {
        let lines = run(Command::FromJson {
            json: r#"{"catalogName": "Prod", "databaseName": "DB"}"#.to_owned(),
        })
        .unwrap();
        assert_eq!(lines, vec!["prod/db"]);
    }

    #[rstest]
    #[case::with_filters(&["qname", "wildcard", "--source", "c", "--table", "t"], "c/%/t%")]
    #[case::no_filters(&["qname", "wildcard"], "no filter")]
    fn wildcard_command(#[case] argv: &[&str], #[case] expected: &str) {
        let args = Args::try_parse_from(argv).unwrap();
        assert_eq!(run(args.command).unwrap(), vec![expected]);
    }

    #[test]
    fn match_filters_names() {
        let args = Args::try_parse_from(["qname", "match", "prod/%", "PROD/db/t", "test/db/t", "prod"]).unwrap();
        assert_eq!(run(args.command).unwrap(), vec!["prod/db/t"]);
    }

    #[test]
    fn match_requires_names() {
        assert!(Args::try_parse_from(["qname", "match", "prod/%"]).is_err());
    }
}
