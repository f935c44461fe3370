use router_commands::{Command, Options, Value};
use router_template::Template;

#[derive(Clone, Debug)]
pub enum Action {
    /// Prints the bound options as JSON
    Print { pretty: bool },
    /// Renders a template with the bound options
    Render(Template),
}

impl Action {
    pub const PRINT: &'static str = "print";

    pub fn output(&self, command: &Command, options: &Options) -> anyhow::Result<String> {
        match self {
            Self::Print { pretty } => {
                let options = options
                    .iter()
                    .map(|(k, v)| (k.to_string(), to_json(v)))
                    .collect::<serde_json::Map<_, _>>();

                let data = serde_json::json!({
                    "command": command.name(),
                    "options": options,
                });

                let out = match *pretty {
                    true => serde_json::to_string_pretty(&data)?,
                    false => serde_json::to_string(&data)?,
                };
                Ok(out)
            }
            Self::Render(template) => Ok(template.render(|key| options.get(key))),
        }
    }
}

fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Flag => serde_json::Value::Bool(true),
        Value::Text(s) => serde_json::Value::String(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use router_commands::{Found, Resolution, Router};

    fn resolve(action: Action, route: &str, args: &[&str]) -> String {
        let mut router = Router::default();
        router.add(route, action).unwrap();
        match router.resolve(args) {
            Resolution::Found(Found {
                command,
                target,
                options,
                ..
            }) => target.output(command, &options).unwrap(),
            res => panic!("{:?}", res),
        }
    }

    #[test]
    fn print() {
        let out = resolve(
            Action::Print { pretty: false },
            "inspect [--all] [-o|--only=]",
            &["inspect", "--all", "-o", "names"],
        );
        assert_eq!(
            out,
            r#"{"command":"inspect","options":{"all":true,"only":"names"}}"#
        );
    }

    #[test]
    fn render() {
        let template = Template::parse("hello ${name} ${shout}").unwrap();
        let out = resolve(
            Action::Render(template),
            "greet -n|--name= [--shout]",
            &["greet", "--shout", "-n", "world"],
        );
        assert_eq!(out, "hello world true");
    }
}
