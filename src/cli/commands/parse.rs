use tracing::debug;

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::error::QueryError;
use crate::grammar::Locale;
use crate::output::format_task;
use crate::parser::QueryParser;
use crate::task::reduce;

/// Execute the parse command.
///
/// The locale comes from `--locale`, falling back to the config file. The
/// query words are joined with single spaces before parsing.
///
/// # Errors
///
/// Returns `QueryError::UnsupportedLocale` for an unknown `--locale` value,
/// or an error if output formatting fails.
pub fn parse(args: &ParseArgs, config: &Config, format: OutputFormat) -> Result<String, QueryError> {
    let locale = match args.locale.as_deref() {
        Some(code) => code.parse::<Locale>()?,
        None => config.locale,
    };
    let query = args.query.join(" ");
    debug!(%locale, query = %query, "parse command");

    let parser = QueryParser::new(locale)?
        .with_max_candidates(args.max_candidates.unwrap_or(config.max_candidates));

    let tokens = parser.parse(&query);
    let record = reduce(&tokens);

    if args.candidates {
        let candidates = parser.candidates(&query);
        format_task(&record, Some(&candidates), format)
    } else {
        format_task(&record, None, format)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn args(query: &[&str], locale: Option<&str>) -> ParseArgs {
        ParseArgs {
            query: query.iter().map(ToString::to_string).collect(),
            locale: locale.map(ToString::to_string),
            candidates: false,
            max_candidates: None,
        }
    }

    fn json(output: &str) -> Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_parse_joins_words() {
        let output = parse(
            &args(&["buy", "milk", "@home", "p1"], None),
            &Config::default(),
            OutputFormat::Json,
        )
        .unwrap();
        let value = json(&output);
        assert_eq!(value["content"], "buy milk");
        assert_eq!(value["labels"][0], "home");
        assert_eq!(value["priority"], 4);
    }

    #[test]
    fn test_parse_locale_flag_overrides_config() {
        let config = Config {
            locale: Locale::Fr,
            ..Config::default()
        };
        let output = parse(&args(&["call", "tomorrow"], Some("en")), &config, OutputFormat::Json)
            .unwrap();
        assert_eq!(json(&output)["due_string"], "tomorrow");
    }

    #[test]
    fn test_parse_uses_config_locale() {
        let config = Config {
            locale: Locale::De,
            ..Config::default()
        };
        let output = parse(&args(&["arzt", "morgen"], None), &config, OutputFormat::Json).unwrap();
        let value = json(&output);
        assert_eq!(value["content"], "arzt");
        assert_eq!(value["due_string"], "morgen");
    }

    #[test]
    fn test_parse_unsupported_locale() {
        let err = parse(&args(&["x"], Some("tlh")), &Config::default(), OutputFormat::Json)
            .unwrap_err();
        assert!(matches!(err, QueryError::UnsupportedLocale(_)));
    }

    #[test]
    fn test_parse_with_candidates() {
        let mut parse_args = args(&["call", "tomorrow"], None);
        parse_args.candidates = true;
        parse_args.max_candidates = Some(2);
        let output = parse(&parse_args, &Config::default(), OutputFormat::Json).unwrap();
        let value = json(&output);
        assert_eq!(value["payload"]["due_string"], "tomorrow");
        let count = value["count"].as_u64().unwrap();
        assert!((1..=2).contains(&count));
        assert_eq!(value["candidates"][0][1]["kind"], "date");
    }
}
