use anyhow::Context as _;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

#[derive(Default, Clone, Debug, serde::Deserialize)]
pub struct Config {
    /// Reject tokens that no option consumed
    #[serde(default)]
    pub strict: bool,

    /// Pretty print the output of the `print` action
    #[serde(default)]
    pub json: bool,

    #[serde(default)]
    pub actions: BTreeMap<String, String>,

    #[serde(default)]
    pub routes: Vec<Route>,
}

#[derive(Default, Clone, Debug, serde::Deserialize)]
pub struct Route {
    pub route: String,
    pub action: String,
}

impl Config {
    pub const ENV_VAR: &'static str = "CLI_ROUTER_CONFIG";
    pub const DEFAULT_PATH: &'static str = "router.toml";

    const EXAMPLE: &'static str = r#"strict = false
json   = true

[actions]
greet  = "hello ${name}"
deploy = "deploying ${file} (level: ${level}, verbose: ${verbose})"

[[routes]]
route  = "greet -n|--name= [--shout]"
action = "greet"

[[routes]]
route  = "deploy -f|--file= [--level=<^[0-9]+$>] [-v|--verbose]"
action = "deploy"

[[routes]]
route  = "inspect [--all] [-o|--only=]"
action = "print"
"#;

    pub fn path() -> PathBuf {
        std::env::var_os(Self::ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH))
    }

    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if !path.is_file() {
            Self::write_default(&path)
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read '{}'", path.display()))?;
        Self::parse(&data).with_context(|| format!("cannot parse '{}'", path.display()))
    }

    pub fn parse(data: &str) -> anyhow::Result<Self> {
        toml::from_str(data).map_err(Into::into)
    }

    fn write_default(path: &Path) -> ! {
        let example = path.with_extension("toml.example");
        eprintln!(
            "cannot load config. creating a default at '{}'",
            example.display()
        );
        eprintln!("copy it to '{}' and edit it then rerun", path.display());

        if let Err(err) = std::fs::write(&example, Self::EXAMPLE) {
            log::error!("cannot write '{}': {}", example.display(), err);
        }

        std::process::exit(1);
    }
}
