use crate::{
    spec::MatchedBy,
    token::ArgToken,
    value::{Options, Value},
    OptionSpec,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FailureKind {
    Required,
}

/// A required option had no matching (or valid) token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchFailure {
    pub kind: FailureKind,
    pub option: Box<str>,
}

impl std::fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            FailureKind::Required => write!(f, "missing required option: --{}", self.option),
        }
    }
}

impl std::error::Error for MatchFailure {}

/// The result of binding tokens against a list of specs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bound<'t> {
    pub options: Options,
    /// Tokens no spec consumed, in their original order
    pub unconsumed: Vec<&'t str>,
}

/// The working list. Consumed positions are marked rather than removed
struct Working<'t, S> {
    tokens: &'t [S],
    consumed: Vec<bool>,
}

impl<'t, S> Working<'t, S>
where
    S: AsRef<str>,
{
    fn new(tokens: &'t [S]) -> Self {
        Self {
            tokens,
            consumed: vec![false; tokens.len()],
        }
    }

    fn remaining(&self) -> impl Iterator<Item = (usize, &'t str)> + '_ {
        let tokens = self.tokens;
        self.consumed
            .iter()
            .enumerate()
            .filter(|&(_, &consumed)| !consumed)
            .map(move |(pos, _)| (pos, tokens[pos].as_ref()))
    }

    fn find(&self, spec: &OptionSpec) -> Option<(usize, ArgToken<'t>, MatchedBy)> {
        self.remaining().find_map(|(pos, raw)| {
            let token = match ArgToken::parse(raw) {
                Some(token) => token,
                None => {
                    log::trace!("skipping inert token '{}'", raw);
                    return None;
                }
            };
            spec.matched_by(token.name).map(|by| (pos, token, by))
        })
    }

    fn next_after(&self, pos: usize) -> Option<(usize, &'t str)> {
        self.remaining().find(|&(next, _)| next > pos)
    }

    fn consume(&mut self, pos: usize) {
        self.consumed[pos] = true;
    }

    fn into_unconsumed(self) -> Vec<&'t str> {
        self.remaining().map(|(_, raw)| raw).collect()
    }
}

/// Binds `tokens` against `specs`, in declaration order.
///
/// Each spec takes the first remaining token naming it. Boolean options bind
/// `true`. Value options take the next remaining token when matched by their
/// short name, or the token's own `=value` when matched by their long name.
///
/// An unmatched required option fails the whole match. No tokens at all is
/// always a match, with nothing bound.
pub fn bind<'t, S>(specs: &[OptionSpec], tokens: &'t [S]) -> Result<Bound<'t>, MatchFailure>
where
    S: AsRef<str>,
{
    if tokens.is_empty() {
        return Ok(Bound::default());
    }

    let mut working = Working::new(tokens);
    let mut options = Options::default();

    for spec in specs {
        match bind_one(spec, &mut working) {
            Some(value) => {
                log::debug!("bound --{} = {}", spec.key(), value);
                options.bind(spec.key(), value);
            }
            None if spec.is_optional() => {
                log::debug!("optional --{} not matched", spec.key());
            }
            None => {
                log::debug!("required --{} not matched", spec.key());
                return Err(MatchFailure {
                    kind: FailureKind::Required,
                    option: spec.key().into(),
                });
            }
        }
    }

    Ok(Bound {
        options,
        unconsumed: working.into_unconsumed(),
    })
}

fn bind_one<S>(spec: &OptionSpec, working: &mut Working<'_, S>) -> Option<Value>
where
    S: AsRef<str>,
{
    let (pos, token, by) = working.find(spec)?;

    if !spec.is_value_required() {
        working.consume(pos);
        return Some(Value::Flag);
    }

    let value = match by {
        MatchedBy::Short => {
            let (next, value) = working.next_after(pos)?;
            working.consume(next);
            value
        }
        MatchedBy::Long => token.value?,
    };

    // taken tokens stay consumed even if the value doesn't validate
    working.consume(pos);
    if !spec.accepts(value) {
        log::debug!("'{}' does not validate for --{}", value, spec.key());
        return None;
    }

    Some(Value::Text(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Vec<OptionSpec> {
        line.split_whitespace()
            .map(OptionSpec::parse)
            .collect::<Result<_, _>>()
            .unwrap()
    }

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn empty_tokens_always_match() {
        let specs = parse("--file= -v|--verbose --level=<^[0-9]+$>");
        let bound = bind::<&str>(&specs, &[]).unwrap();
        assert!(bound.options.is_empty());
        assert!(bound.unconsumed.is_empty());
    }

    #[test]
    fn required_missing() {
        let specs = parse("[--color] --file= [-v|--verbose]");
        let err = bind(&specs, &["--color", "-v", "--other"]).unwrap_err();
        assert_eq!(err.kind, FailureKind::Required);
        assert_eq!(&*err.option, "file");
    }

    #[test]
    fn short_value() {
        let specs = parse("-f|--file=");
        let bound = bind(&specs, &["-f", "data.txt"]).unwrap();
        assert_eq!(bound.options["file"], text("data.txt"));
        assert_eq!(bound.options.len(), 1);
        assert!(bound.unconsumed.is_empty());
    }

    #[test]
    fn short_value_takes_next_token_even_if_flag() {
        let specs = parse("-f|--file= [--verbose]");
        let bound = bind(&specs, &["-f", "--verbose"]).unwrap();
        assert_eq!(bound.options["file"], text("--verbose"));
        assert!(!bound.options.contains("verbose"));
    }

    #[test]
    fn short_value_missing() {
        let specs = parse("-f|--file=");
        let err = bind(&specs, &["-f"]).unwrap_err();
        assert_eq!(&*err.option, "file");

        let specs = parse("[-f|--file=]");
        let bound = bind(&specs, &["-f"]).unwrap();
        assert!(bound.options.is_empty());
        assert_eq!(bound.unconsumed, vec!["-f"]);
    }

    #[test]
    fn long_inline_value() {
        let specs = parse("--file=");
        let bound = bind(&specs, &["--file=data.txt"]).unwrap();
        assert_eq!(bound.options["file"], text("data.txt"));

        let err = bind(&specs, &["--file", "data.txt"]).unwrap_err();
        assert_eq!(&*err.option, "file");
    }

    #[test]
    fn boolean_flag() {
        let specs = parse("--verbose");
        let bound = bind(&specs, &["--verbose"]).unwrap();
        assert_eq!(bound.options["verbose"], Value::Flag);
        assert!(bound.options.flag("verbose"));
    }

    #[test]
    fn dash_count_is_irrelevant() {
        let specs = parse("-v|--verbose [-q|--quiet]");
        let bound = bind(&specs, &["verbose", "--q"]).unwrap();
        assert!(bound.options.flag("verbose"));
        assert!(bound.options.flag("quiet"));
    }

    #[test]
    fn optional_absent() {
        let specs = parse("[--color] --verbose");
        let bound = bind(&specs, &["--verbose"]).unwrap();
        assert!(!bound.options.contains("color"));
        assert!(bound.options.flag("verbose"));
    }

    #[test]
    fn validation() {
        let required = parse("--level=<^[0-9]+$>");
        let err = bind(&required, &["--level=abc"]).unwrap_err();
        assert_eq!(&*err.option, "level");

        let bound = bind(&required, &["--level=42"]).unwrap();
        assert_eq!(bound.options["level"], text("42"));

        let optional = parse("[--level=<^[0-9]+$>]");
        let bound = bind(&optional, &["--level=abc"]).unwrap();
        assert!(!bound.options.contains("level"));
        assert!(bound.unconsumed.is_empty());
    }

    #[test]
    fn validation_failure_still_consumes() {
        let specs = parse("[-l|--level=<^[0-9]+$>] [--name=]");
        let bound = bind(&specs, &["-l", "abc", "--name=x"]).unwrap();
        assert!(!bound.options.contains("level"));
        assert_eq!(bound.options["name"], text("x"));
        assert!(bound.unconsumed.is_empty());

        // a later spec can't see a token an invalid value was taken from
        let specs = parse("[--level=<^[0-9]+$>] [-l|--low]");
        let bound = bind(&specs, &["--level=abc", "-l"]).unwrap();
        assert!(!bound.options.contains("level"));
        assert!(bound.options.flag("low"));
        assert!(bound.unconsumed.is_empty());
    }

    #[test]
    fn consumed_tokens_are_not_reused() {
        let specs = parse("-f|--file= [-g|--grep=]");
        let bound = bind(&specs, &["-f", "-g", "-g", "pattern"]).unwrap();
        assert_eq!(bound.options["file"], text("-g"));
        assert_eq!(bound.options["grep"], text("pattern"));
        assert!(bound.unconsumed.is_empty());
    }

    #[test]
    fn later_specs_can_bind_earlier_tokens() {
        let specs = parse("--first= --second");
        let bound = bind(&specs, &["--second", "--first=one"]).unwrap();
        assert_eq!(bound.options["first"], text("one"));
        assert!(bound.options.flag("second"));
    }

    #[test]
    fn inert_tokens_stay() {
        let specs = parse("[--verbose]");
        let bound = bind(&specs, &["data.txt", "--verbose", "---x"]).unwrap();
        assert!(bound.options.flag("verbose"));
        assert_eq!(bound.unconsumed, vec!["data.txt", "---x"]);
    }

    #[test]
    fn first_candidate_decides() {
        let specs = parse("[--file=]");
        let bound = bind(&specs, &["--file", "--file=late.txt"]).unwrap();
        assert!(!bound.options.contains("file"));
        assert_eq!(bound.unconsumed, vec!["--file", "--file=late.txt"]);
    }
}
