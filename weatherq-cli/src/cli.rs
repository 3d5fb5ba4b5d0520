use anyhow::Result;
use clap::Parser;
use inquire::Text;

use weatherq_core::{Config, WeatherClient, render};

/// Top-level CLI struct.
///
/// The tool takes no flags or positional arguments beyond the clap
/// standards; the city is read interactively.
#[derive(Debug, Parser)]
#[command(name = "weatherq", version, about = "City weather lookup")]
pub struct Cli {}

impl Cli {
    /// Run the whole lookup: config, prompt, one fetch, print.
    ///
    /// Handled failures print a one-line message on stdout and end the run
    /// with exit code 0; only panics or argument parsing leave that path.
    pub async fn run(self) -> Result<()> {
        println!("=== Weather lookup ===");
        println!();

        let config = match Config::from_env() {
            Ok(config) => config,
            Err(err) => {
                println!("Configuration error: {err}");
                return Ok(());
            }
        };

        let input = match Text::new("City to look up:").prompt() {
            Ok(input) => input,
            Err(err) => {
                println!("Could not read city name: {err}");
                return Ok(());
            }
        };

        // Blank input stops the run before any request is made.
        let Some(city) = normalize_city(&input) else {
            println!("City name must not be empty.");
            return Ok(());
        };

        println!();
        println!("Looking up weather for {city}...");

        let client = WeatherClient::new(&config);
        match client.fetch(&city).await {
            Ok(payload) => {
                println!();
                for line in render::render(&city, &payload) {
                    println!("{line}");
                }
            }
            Err(err) => println!("Lookup failed: {err}"),
        }

        Ok(())
    }
}

/// Trim surrounding whitespace; blank or whitespace-only entries are
/// rejected.
fn normalize_city(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}
