use crate::Error;
use regex::Regex;

/// A single declared option, parsed from a token like `[-f|--file=<^\w+$>]`
#[derive(Clone, Debug)]
pub struct OptionSpec {
    long: Box<str>,
    short: Option<char>,
    optional: bool,
    value_required: bool,
    pattern: Option<Regex>,
}

impl PartialEq for OptionSpec {
    fn eq(&self, other: &Self) -> bool {
        self.long == other.long
            && self.short == other.short
            && self.optional == other.optional
            && self.value_required == other.value_required
            && self.pattern() == other.pattern()
    }
}

impl Eq for OptionSpec {}

/// Which of an option's names a flag token used
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatchedBy {
    Long,
    Short,
}

impl OptionSpec {
    pub fn parse(token: &str) -> Result<Self, Error> {
        let malformed = || Error::MalformedSpec(token.to_string());

        let (optional, body) = match token.strip_prefix('[') {
            Some(rest) => (true, rest.strip_suffix(']').ok_or_else(malformed)?),
            None if token.ends_with(']') => return Err(malformed()),
            None => (false, token),
        };

        let (short, body) = match body.strip_prefix('-') {
            Some(rest) if !rest.starts_with('-') => {
                let mut chars = rest.chars();
                let short = chars.next().filter(|&c| is_word(c)).ok_or_else(malformed)?;
                let rest = chars.as_str().strip_prefix('|').ok_or_else(malformed)?;
                (Some(short), rest)
            }
            _ => (None, body),
        };

        let body = body.strip_prefix("--").ok_or_else(malformed)?;
        let end = body.find(|c| !is_word(c)).unwrap_or_else(|| body.len());
        let (long, tail) = body.split_at(end);
        if long.is_empty() {
            return Err(malformed());
        }

        let (value_required, pattern) = match tail {
            "" => (false, None),
            "=" => (true, None),
            tail => {
                let pattern = tail
                    .strip_prefix("=<")
                    .and_then(|s| s.strip_suffix('>'))
                    .filter(|s| !s.is_empty())
                    .ok_or_else(malformed)?;
                let pattern = Regex::new(pattern).map_err(|err| {
                    log::debug!("invalid validation pattern in '{}': {}", token, err);
                    malformed()
                })?;
                (true, Some(pattern))
            }
        };

        Ok(Self {
            long: long.into(),
            short,
            optional,
            value_required,
            pattern,
        })
    }

    pub fn long_name(&self) -> &str {
        &*self.long
    }

    pub const fn short_name(&self) -> Option<char> {
        self.short
    }

    /// The key this option is bound under
    pub fn key(&self) -> &str {
        self.long_name()
    }

    pub const fn is_optional(&self) -> bool {
        self.optional
    }

    pub const fn is_value_required(&self) -> bool {
        self.value_required
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(Regex::as_str)
    }

    /// Whether a tokenized name refers to this option, and through which name
    pub fn matched_by(&self, name: &str) -> Option<MatchedBy> {
        if name == &*self.long {
            return Some(MatchedBy::Long);
        }

        let mut chars = name.chars();
        match (chars.next(), chars.next(), self.short) {
            (Some(ch), None, Some(short)) if ch == short => Some(MatchedBy::Short),
            _ => None,
        }
    }

    /// Whether a bound value satisfies the validation pattern, if any
    pub fn accepts(&self, value: &str) -> bool {
        self.pattern
            .as_ref()
            .map(|re| re.is_match(value))
            .unwrap_or(true)
    }
}

impl std::fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.optional {
            f.write_str("[")?;
        }
        if let Some(short) = self.short {
            write!(f, "-{}|", short)?;
        }
        write!(f, "--{}", self.long)?;
        if self.value_required {
            f.write_str("=")?;
        }
        if let Some(pattern) = self.pattern() {
            write!(f, "<{}>", pattern)?;
        }
        if self.optional {
            f.write_str("]")?;
        }
        Ok(())
    }
}

pub(crate) fn is_word(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
