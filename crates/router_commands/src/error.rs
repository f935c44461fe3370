#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyCommand,
    LeadingOption(String),
    DuplicateCommand(String),
    NotInvocable(String),
    MalformedSpec(String),
    DuplicateOption(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCommand => f.write_str("a command must be provided"),
            Self::LeadingOption(name) => write!(f, "commands cannot start with an option: {}", name),
            Self::DuplicateCommand(name) => {
                write!(f, "command previously registered with the same name: {}", name)
            }
            Self::NotInvocable(name) => write!(f, "no invocable action named: {}", name),
            Self::MalformedSpec(token) => write!(f, "cannot parse option spec: {}", token),
            Self::DuplicateOption(name) => write!(f, "duplicate option found: {}", name),
        }
    }
}

impl std::error::Error for Error {}
