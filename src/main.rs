use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "optional=info";

#[derive(Parser)]
struct Opts {
    /// JSON document to read, defaults to reading from stdin.
    #[arg(long, name = "path")]
    input: Option<PathBuf>,
    /// JSON pointer to look up in the document.
    #[arg(long, default_value = "")]
    pointer: String,
    /// JSON value to use if the looked up value is missing or null.
    #[arg(long, name = "json")]
    default: Option<String>,
    /// Fail with the given message if the looked up value is missing or null.
    #[arg(long, name = "message")]
    expect: Option<String>,
    /// Pretty print the output.
    #[arg(long)]
    pretty: bool,
}

pub fn main() -> Result<()> {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::INFO.into());
    let env_filter;

    if let Ok(log) = env::var("OPTIONAL_LOG") {
        env_filter = builder.parse(log).context("parsing OPTIONAL_LOG")?;
    } else {
        env_filter = builder
            .parse(DEFAULT_FILTER)
            .context("parsing default log filter")?;
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let opts = Opts::parse();

    let document = read_document(opts.input.as_deref())?;
    let value = lookup(&document, &opts.pointer)?;

    value
        .if_some(|_| tracing::debug!(pointer = %opts.pointer, "found value"))
        .if_none(|| tracing::debug!(pointer = %opts.pointer, "no value"));

    let value = with_default(value, opts.default.as_deref())?;

    if let Some(message) = opts.expect {
        let found = value.as_ref().try_expect(message)?;
        tracing::trace!(?found, "value is present");
    }

    let output = value.to_json()?;
    let mut stdout = io::stdout().lock();

    if opts.pretty {
        serde_json::to_writer_pretty(&mut stdout, &output)?;
    } else {
        serde_json::to_writer(&mut stdout, &output)?;
    }

    writeln!(stdout)?;
    Ok(())
}

/// Read the input document from the given path or stdin.
fn read_document(path: Option<&Path>) -> Result<Value> {
    let Some(path) = path else {
        tracing::trace!("reading from stdin");
        let mut input = String::new();

        io::stdin()
            .read_to_string(&mut input)
            .context("reading stdin")?;

        return serde_json::from_str(&input).context("parsing stdin");
    };

    tracing::trace!("reading: {}", path.display());
    let input = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&input).with_context(|| format!("parsing {}", path.display()))
}

/// Look up a value by pointer. Both a missing member and `null` are absent.
fn lookup(document: &Value, pointer: &str) -> Result<optional::Option<Value>> {
    anyhow::ensure!(
        pointer.is_empty() || pointer.starts_with('/'),
        "invalid JSON pointer {pointer:?}"
    );

    let Some(value) = document.pointer(pointer) else {
        tracing::debug!(pointer, "missing member");
        return Ok(optional::none());
    };

    Ok(optional::Option::from_json(value.clone())?)
}

/// Fall back to the JSON `default` if `value` is absent. The default is only
/// parsed when it's needed.
fn with_default(
    value: optional::Option<Value>,
    default: Option<&str>,
) -> Result<optional::Option<Value>> {
    let Some(default) = default else {
        return Ok(value);
    };

    if value.is_some() {
        return Ok(value);
    }

    let default = serde_json::from_str::<Value>(default).context("parsing --default")?;
    let default = optional::Option::from_json(default).context("converting --default")?;
    Ok(value.or(default))
}

#[cfg(test)]
mod tests {
    use optional::{none, some};
    use serde_json::json;

    use super::{lookup, with_default};

    #[test]
    fn test_lookup() {
        let document = json!({"show": {"title": "Severance", "year": null}});

        assert_eq!(lookup(&document, "/show/episodes").unwrap(), none());
        assert_eq!(lookup(&document, "/show/year").unwrap(), none());
        assert_eq!(
            lookup(&document, "/show/title").unwrap(),
            some(json!("Severance"))
        );
        assert_eq!(lookup(&document, "").unwrap(), some(document.clone()));
    }

    #[test]
    fn test_lookup_invalid_pointer() {
        let document = json!({"a": 1});
        let error = lookup(&document, "a").unwrap_err();
        assert_eq!(error.to_string(), r#"invalid JSON pointer "a""#);
        assert_eq!(lookup(&document, "/a").unwrap(), some(json!(1)));
    }

    #[test]
    fn test_with_default() {
        let document = json!({"show": {"title": null}});
        let value = lookup(&document, "/show/title").unwrap();
        assert_eq!(
            with_default(value, Some(r#""unknown""#)).unwrap(),
            some(json!("unknown"))
        );

        assert_eq!(with_default(none(), None).unwrap(), none());
        assert_eq!(with_default(none(), Some("null")).unwrap(), none());
        assert!(with_default(none(), Some("not json")).is_err());
    }

    #[test]
    fn test_with_default_is_lazy() {
        let value = some(json!("x"));
        assert_eq!(with_default(value, Some("not json")).unwrap(), some(json!("x")));
    }

    #[test]
    fn test_expect_missing() {
        let document = json!({"show": {}});
        let value = lookup(&document, "/show/title").unwrap();
        let error = value.as_ref().try_expect("need title").unwrap_err();
        assert_eq!(error.to_string(), "need title");
    }
}
