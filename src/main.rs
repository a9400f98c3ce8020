use anyhow::Result;
use std::env;
use std::io::{self, BufRead};
use std::process;

use wuge_name_engine::{init_logging, render_text, AppConfig, NumerologyEngine, USAGE_HINT};

/// Command-line options
struct CliArgs {
    json: bool,
    config_path: Option<String>,
    text: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs {
        json: false,
        config_path: None,
        text: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => cli.json = true,
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config needs a file path"))?;
                cli.config_path = Some(path.clone());
            }
            _ => cli.text.push(arg.clone()),
        }
    }

    Ok(cli)
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = parse_args(&args)?;

    let config = match &cli.config_path {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    }
    .with_env_overrides(|key| env::var(key).ok());

    let engine = config.build_engine();
    let reference_year = config.reference_year();

    if cli.text.is_empty() {
        // Batch mode: one request per stdin line
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            print_reading(&engine, &line, reference_year, cli.json)?;
        }
        return Ok(());
    }

    let text = cli.text.join(" ");
    if !print_reading(&engine, &text, reference_year, cli.json)? {
        eprintln!("{}", USAGE_HINT);
        process::exit(2);
    }

    Ok(())
}

/// Print one reading; false if the input had no name
fn print_reading(engine: &NumerologyEngine, text: &str, reference_year: i32, json: bool) -> Result<bool> {
    let Some(reading) = engine.evaluate(text, reference_year) else {
        return Ok(false);
    };

    if json {
        println!("{}", serde_json::to_string(&reading)?);
    } else {
        println!("{}\n", render_text(&reading));
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_text_and_flags() {
        let cli = parse_args(&args(&["--json", "李大同", "1990"])).unwrap();

        assert!(cli.json);
        assert_eq!(cli.text, vec!["李大同", "1990"]);
        assert_eq!(cli.config_path, None);
    }

    #[test]
    fn test_parse_args_config() {
        let cli = parse_args(&args(&["--config", "wuge.json", "歐陽修"])).unwrap();

        assert_eq!(cli.config_path.as_deref(), Some("wuge.json"));
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_args_config_missing_path() {
        assert!(parse_args(&args(&["--config"])).is_err());
    }
}
