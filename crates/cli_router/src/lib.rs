use anyhow::Context as _;
use router_commands::{Actions, Found, Resolution, Router};
use router_template::Template;

mod action;
pub use action::Action;

mod config;
pub use config::Config;

/// What running a command line produced
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Output(String),
    /// A required option was missing or invalid
    Usage { usage: String, reason: String },
    /// Tokens left over in strict mode
    Unexpected { usage: String, tokens: Vec<String> },
    NotFound { available: Vec<String> },
}

pub struct App {
    router: Router<Action>,
    strict: bool,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut actions = Actions::default();
        actions.register(Action::PRINT, Action::Print {
            pretty: config.json,
        });

        for (name, body) in &config.actions {
            let template = Template::parse(body)
                .with_context(|| format!("cannot parse template for action '{}'", name))?;
            anyhow::ensure!(
                actions
                    .register(name.as_str(), Action::Render(template))
                    .is_none(),
                "'{}' is a built-in action",
                name
            );
        }

        let mut router = Router::default();
        for route in &config.routes {
            router
                .add_action(&route.route, &actions, &route.action)
                .with_context(|| format!("cannot register route '{}'", route.route))?;
        }

        log::info!("loaded {} route(s)", router.len());
        Ok(Self {
            router,
            strict: config.strict,
        })
    }

    pub fn run<S>(&self, args: &[S]) -> anyhow::Result<Outcome>
    where
        S: AsRef<str>,
    {
        let found = match self.router.resolve(args) {
            Resolution::Found(found) => found,
            Resolution::Required { command, failure } => {
                return Ok(Outcome::Usage {
                    usage: command.usage().to_string(),
                    reason: failure.to_string(),
                })
            }
            Resolution::NotFound => {
                let mut available = self
                    .router
                    .commands()
                    .map(|cmd| cmd.usage().to_string())
                    .collect::<Vec<_>>();
                available.sort();
                return Ok(Outcome::NotFound { available });
            }
        };

        let Found {
            command,
            target,
            options,
            unconsumed,
        } = found;

        if !unconsumed.is_empty() {
            if self.strict {
                return Ok(Outcome::Unexpected {
                    usage: command.usage().to_string(),
                    tokens: unconsumed.into_iter().map(String::from).collect(),
                });
            }
            log::warn!("{}: ignoring {:?}", command.name(), unconsumed);
        }

        target
            .output(command, &options)
            .with_context(|| format!("cannot run '{}'", command.name()))
            .map(Outcome::Output)
    }
}
