//! `${key}` substitution for turning bound options into output text

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    NestedTemplates,
    NonTerminated,
    EmptyTemplate,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NestedTemplates => f.write_str("nested templates are not allowed"),
            Self::NonTerminated => f.write_str("non-terminated template found"),
            Self::EmptyTemplate => f.write_str("empty templates are not allowed"),
        }
    }
}

impl std::error::Error for Error {}

type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(Box<str>),
    Key(Box<str>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    body: Box<str>,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(input: &str) -> Result<Self> {
        let mut segments = vec![];
        let mut start = 0;
        let mut open = None;

        let mut iter = input.char_indices().peekable();
        while let Some((pos, ch)) = iter.next() {
            match (ch, iter.peek(), open) {
                ('$', Some((_, '{')), None) => {
                    if start < pos {
                        segments.push(Segment::Literal(input[start..pos].into()));
                    }
                    open.replace(pos + 2);
                    iter.next();
                }

                ('{', .., Some(..)) | ('$', Some((_, '{')), Some(..)) => {
                    return Err(Error::NestedTemplates)
                }

                ('}', .., Some(head)) => {
                    if head == pos {
                        return Err(Error::EmptyTemplate);
                    }
                    segments.push(Segment::Key(input[head..pos].into()));
                    open.take();
                    start = pos + 1;
                }

                _ => {}
            }
        }

        if open.is_some() {
            return Err(Error::NonTerminated);
        }

        if start < input.len() {
            segments.push(Segment::Literal(input[start..].into()));
        }

        Ok(Self {
            body: input.into(),
            segments,
        })
    }

    pub fn body(&self) -> &str {
        &*self.body
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Key(key) => Some(&**key),
            _ => None,
        })
    }

    /// Substitutes each key through `lookup`. Unknown keys become empty
    pub fn render<F, D>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<D>,
        D: std::fmt::Display,
    {
        let mut out = String::with_capacity(self.body.len());
        for seg in &self.segments {
            match seg {
                Segment::Literal(s) => out.push_str(s),
                Segment::Key(key) => match lookup(key) {
                    Some(val) => out.push_str(&val.to_string()),
                    None => log::trace!("no value for '{}'", key),
                },
            }
        }
        out
    }
}

impl std::str::FromStr for Template {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parse_keys() {
        let template = Template::parse("deploying ${file} at ${level}!").unwrap();
        assert_eq!(template.keys().collect::<Vec<_>>(), vec!["file", "level"]);
        assert_eq!(template.body(), "deploying ${file} at ${level}!");

        let template = Template::parse("nothing to see $here {or} here").unwrap();
        assert_eq!(template.keys().count(), 0);

        let tests = vec![
            ("${a${b}}", Error::NestedTemplates),
            ("${a{b}", Error::NestedTemplates),
            ("${abc", Error::NonTerminated),
            ("abc ${}", Error::EmptyTemplate),
        ];
        for (input, err) in tests {
            assert_eq!(Template::parse(input).unwrap_err(), err, "{}", input);
        }
    }

    #[test]
    fn render() {
        let mut env = HashMap::new();
        env.insert("name", "world");
        env.insert("shout", "true");

        let template: Template = "${name}: hello ${name} (${shout}) ${missing}.".parse().unwrap();
        assert_eq!(
            template.render(|key| env.get(key)),
            "world: hello world (true) ."
        );

        let template = Template::parse("${name}").unwrap();
        assert_eq!(template.render(|key| env.get(key)), "world");
    }
}
