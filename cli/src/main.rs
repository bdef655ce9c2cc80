mod config;
mod handler;

use crate::config::cli_parse;
use crate::handler::handle_line;
use anyhow::Result;
use std::io::{self, BufRead, BufReader, Write};

fn main() -> Result<()> {
  let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
  env_logger::Builder::from_env(env).init();
  let config = cli_parse();
  log::debug!("Wall heights rotation: {}", config.capabilities.wall_heights);

  let mut input = BufReader::new(io::stdin());
  let mut output = io::stdout();
  let mut s = String::new();
  loop {
    s.clear();
    if input.read_line(&mut s)? == 0 {
      break;
    }
    if s.trim().is_empty() {
      continue;
    }
    let response = handle_line(&s, &config.capabilities);

    let json = if config.pretty {
      serde_json::to_string_pretty(&response)?
    } else {
      serde_json::to_string(&response)?
    };
    writeln!(&mut output, "{}", json)?;
    output.flush()?;
  }

  Ok(())
}
