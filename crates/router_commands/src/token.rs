use crate::spec::is_word;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dashes {
    None,
    Single,
    Double,
}

/// A raw command line argument that looks like a flag: `[-[-]]name[=value]`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArgToken<'a> {
    pub dashes: Dashes,
    pub name: &'a str,
    pub value: Option<&'a str>,
}

impl<'a> ArgToken<'a> {
    /// Returns `None` when the input isn't a flag token. Such tokens are inert
    pub fn parse(input: &'a str) -> Option<Self> {
        let (dashes, rest) = match input.strip_prefix("--") {
            Some(rest) => (Dashes::Double, rest),
            None => match input.strip_prefix('-') {
                Some(rest) => (Dashes::Single, rest),
                None => (Dashes::None, input),
            },
        };

        let end = rest.find(|c| !is_word(c)).unwrap_or_else(|| rest.len());
        let (name, tail) = rest.split_at(end);
        if name.is_empty() {
            return None;
        }

        let value = match tail {
            "" => None,
            tail => Some(tail.strip_prefix('=')?),
        };

        Some(Self {
            dashes,
            name,
            value,
        })
    }
}
