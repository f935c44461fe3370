use crate::{Error, OptionSpec};
use std::collections::HashSet;

/// A registered command: its name and the options it declares
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    name: Box<str>,
    usage: Box<str>,
    specs: Box<[OptionSpec]>,
}

impl Command {
    /// Parses a route line, e.g. `deploy -f|--file= [--verbose]`
    pub fn parse(route: &str) -> Result<Self, Error> {
        let name = Self::name_of(route)?;

        let mut seen = HashSet::new();
        let mut specs = vec![];
        for part in route.split_whitespace().skip(1) {
            let spec = OptionSpec::parse(part)?;

            if !seen.insert(spec.long_name().to_string()) {
                return Err(Error::DuplicateOption(spec.long_name().to_string()));
            }

            specs.push(spec);
        }

        Ok(Self {
            name: name.into(),
            usage: route.split_whitespace().collect::<Vec<_>>().join(" ").into(),
            specs: specs.into_boxed_slice(),
        })
    }

    pub fn name_of(route: &str) -> Result<&str, Error> {
        let name = route
            .split_whitespace()
            .next()
            .ok_or_else(|| Error::EmptyCommand)?;

        if name.starts_with('-') {
            return Err(Error::LeadingOption(name.to_string()));
        }
        Ok(name)
    }

    pub fn name(&self) -> &str {
        &*self.name
    }

    /// The normalized route line this command was registered with
    pub fn usage(&self) -> &str {
        &*self.usage
    }

    pub fn specs(&self) -> &[OptionSpec] {
        &*self.specs
    }
}
