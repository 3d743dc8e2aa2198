use config::Config;
use std::env;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    dotenv::dotenv().ok(); // Used to load the `.env` file if any
    pretty_env_logger::init();

    let command = args.get(1).map(String::as_str).unwrap_or("rankings");
    let config = Config::new(args.get(2).cloned());

    let matches = config.load_matches()?;
    let output = report::run(command, &matches)?;
    println!("{}", output);

    Ok(())
}

mod config;
mod report;
#[cfg(test)]
mod tests;
