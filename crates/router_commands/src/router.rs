use crate::{
    matcher::{self, MatchFailure},
    Command, Error, Options,
};
use std::collections::HashMap;

/// Something a resolved command can be handed to
pub trait Callable {
    fn call(&self, command: &Command, options: &Options) -> anyhow::Result<()>;
}

impl<F> Callable for F
where
    F: Fn(&Command, &Options) -> anyhow::Result<()>,
{
    fn call(&self, command: &Command, options: &Options) -> anyhow::Result<()> {
        (self)(command, options)
    }
}

/// Targets registered by name, for routes that are described rather than coded
pub struct Actions<T> {
    actions: HashMap<Box<str>, T>,
}

impl<T> Default for Actions<T> {
    fn default() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }
}

impl<T> Actions<T> {
    /// Returns the previous target, if the name was taken
    pub fn register(&mut self, name: impl Into<Box<str>>, target: T) -> Option<T> {
        self.actions.insert(name.into(), target)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.actions.get(name)
    }
}

#[derive(Debug)]
pub struct Found<'r, 't, T> {
    pub command: &'r Command,
    pub target: &'r T,
    pub options: Options,
    pub unconsumed: Vec<&'t str>,
}

#[derive(Debug)]
pub enum Resolution<'r, 't, T> {
    Found(Found<'r, 't, T>),
    Required {
        command: &'r Command,
        failure: MatchFailure,
    }, // just print the usage
    NotFound,
}

#[derive(Debug, PartialEq)]
pub enum Dispatched {
    Called,
    Required(MatchFailure),
    NotFound,
}

struct Route<T> {
    command: Command,
    target: T,
}

pub struct Router<T> {
    routes: HashMap<Box<str>, Route<T>>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }
}

impl<T> Router<T> {
    pub fn add(&mut self, route: &str, target: T) -> Result<(), Error> {
        self.add_with(route, || Ok(target))
    }

    /// Registers a route whose target is looked up in `actions` by name
    pub fn add_action(&mut self, route: &str, actions: &Actions<T>, action: &str) -> Result<(), Error>
    where
        T: Clone,
    {
        self.add_with(route, || {
            actions
                .get(action)
                .cloned()
                .ok_or_else(|| Error::NotInvocable(action.to_string()))
        })
    }

    fn add_with<F>(&mut self, route: &str, target: F) -> Result<(), Error>
    where
        F: FnOnce() -> Result<T, Error>,
    {
        let name = Command::name_of(route)?;
        if self.routes.contains_key(name) {
            return Err(Error::DuplicateCommand(name.to_string()));
        }

        let target = target()?;
        let command = Command::parse(route)?;
        log::debug!("registered: {}", command.usage());

        self.routes
            .insert(command.name().into(), Route { command, target });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<(&Command, &T)> {
        self.routes
            .get(name)
            .map(|Route { command, target }| (command, target))
    }

    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.routes.values().map(|route| &route.command)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Looks up the leading token as a command and binds the rest against its options
    pub fn resolve<'t, S>(&self, tokens: &'t [S]) -> Resolution<'_, 't, T>
    where
        S: AsRef<str>,
    {
        let (head, rest) = match tokens.split_first() {
            Some(split) => split,
            None => return Resolution::NotFound,
        };

        let Route { command, target } = match self.routes.get(head.as_ref()) {
            Some(route) => route,
            None => {
                log::debug!("no command named '{}'", head.as_ref());
                return Resolution::NotFound;
            }
        };

        match matcher::bind(command.specs(), rest) {
            Ok(bound) => Resolution::Found(Found {
                command,
                target,
                options: bound.options,
                unconsumed: bound.unconsumed,
            }),
            Err(failure) => Resolution::Required { command, failure },
        }
    }
}

impl<T> Router<T>
where
    T: Callable,
{
    /// Resolves the tokens and calls the target with the bound options
    pub fn dispatch<S>(&self, tokens: &[S]) -> anyhow::Result<Dispatched>
    where
        S: AsRef<str>,
    {
        match self.resolve(tokens) {
            Resolution::Found(Found {
                command,
                target,
                options,
                unconsumed,
            }) => {
                if !unconsumed.is_empty() {
                    log::debug!("{}: ignoring {:?}", command.name(), unconsumed);
                }
                target.call(command, &options)?;
                Ok(Dispatched::Called)
            }
            Resolution::Required { failure, .. } => Ok(Dispatched::Required(failure)),
            Resolution::NotFound => Ok(Dispatched::NotFound),
        }
    }
}
