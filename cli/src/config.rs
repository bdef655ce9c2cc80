use clap::{Arg, ArgAction, Command};
use orient_structure::block_state::Capabilities;

#[derive(Clone, PartialEq, Debug)]
pub struct Config {
  pub capabilities: Capabilities,
  pub pretty: bool,
}

pub fn cli_parse() -> Config {
  let matches = Command::new(clap::crate_name!())
    .version(clap::crate_version!())
    .author(clap::crate_authors!("\n"))
    .about(clap::crate_description!())
    .arg(
      Arg::new("no-wall-heights")
        .long("no-wall-heights")
        .help("Keep wall heights as is, for platforms that don't store them per side")
        .action(ArgAction::SetTrue),
    )
    .arg(
      Arg::new("pretty")
        .long("pretty")
        .help("Pretty print responses")
        .action(ArgAction::SetTrue),
    )
    .get_matches();

  Config {
    capabilities: Capabilities {
      wall_heights: !matches.get_flag("no-wall-heights"),
    },
    pretty: matches.get_flag("pretty"),
  }
}
