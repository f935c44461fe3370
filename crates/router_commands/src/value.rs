use std::{collections::HashMap, str::FromStr};

/// A value bound to an option by the matcher
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// The option was present. This is the literal `true`
    Flag,
    /// The option carried a value
    Text(String),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Flag => None,
            Self::Text(s) => Some(s),
        }
    }

    pub const fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => f.write_str("true"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    map: HashMap<Box<str>, Value>,
}

impl std::ops::Index<&str> for Options {
    type Output = Value;
    fn index(&self, index: &str) -> &Self::Output {
        &self.map[index]
    }
}

impl Options {
    pub(crate) fn bind(&mut self, key: &str, value: Value) {
        self.map.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Whether the option was given as a flag
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).filter(|v| v.is_flag()).is_some()
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_parsed<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: Into<anyhow::Error> + Send + 'static,
    {
        use anyhow::Context as _;
        self.text(key)
            .with_context(|| format!("cannot lookup: {}", key))?
            .parse()
            .map_err(Into::into)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.map.iter().map(|(k, v)| (&**k, v))
    }
}
