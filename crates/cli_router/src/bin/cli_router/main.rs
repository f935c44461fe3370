use cli_router::{App, Config, Outcome};

fn init_logger() -> anyhow::Result<()> {
    alto_logger::init_alt_term_logger()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    simple_env_load::load_env_from(&[".env", ".env.dev"]);

    init_logger()?;

    let config = Config::load()?;
    let app = App::new(&config)?;

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    match app.run(&args)? {
        Outcome::Output(out) => println!("{}", out),

        Outcome::Usage { usage, reason } => {
            eprintln!("{}", reason);
            eprintln!("usage: {}", usage);
            std::process::exit(2)
        }

        Outcome::Unexpected { usage, tokens } => {
            eprintln!("unexpected arguments: {}", tokens.join(" "));
            eprintln!("usage: {}", usage);
            std::process::exit(2)
        }

        Outcome::NotFound { available } => {
            match args.first() {
                Some(cmd) => eprintln!("unknown command: {}", cmd),
                None => eprintln!("no command given"),
            }
            eprintln!("available commands:");
            for usage in available {
                eprintln!("  {}", usage);
            }
            std::process::exit(1)
        }
    }

    Ok(())
}
