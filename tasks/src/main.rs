use clap::{Arg, ArgAction, Command};
use log::LevelFilter;
use once_cell::sync::Lazy;
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

mod index;
mod scaffold;
mod utils;

// -------------------------------------------------------------------------------------------------
// CONSTANTS
// -------------------------------------------------------------------------------------------------

pub static ROOT_DIR: Lazy<PathBuf> = Lazy::new(utils::project_root);

// -------------------------------------------------------------------------------------------------
// MAIN
// -------------------------------------------------------------------------------------------------

fn main() -> Result<(), std::io::Error> {
    // We parse the input args
    let matches = Command::new("tasks")
        .about("Workspace scripts runner")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Prints debug messages"),
        )
        .subcommand(
            Command::new("new-example")
                .about("Scaffold a boilerplate example crate")
                .arg(Arg::new("name").required(true).help("Name of the new example"))
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .help("Output directory (defaults to demos/<name> under the repo root)"),
                ),
        )
        .subcommand(
            Command::new("gen-index")
                .about("Regenerate EXAMPLES.md from the workspace's example modules"),
        )
        .arg_required_else_help(true)
        .get_matches();

    // We initialize the logger with proper verbosity
    let verb = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CombinedLogger::init(vec![TermLogger::new(
        verb,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])
    .unwrap();

    if let Some(sub) = matches.subcommand_matches("new-example") {
        let name = sub
            .get_one::<String>("name")
            .expect("name is a required argument");
        let out_dir = match sub.get_one::<String>("dir") {
            Some(dir) => PathBuf::from(dir),
            None => ROOT_DIR.join("demos").join(name),
        };
        scaffold::new_example(name, &out_dir)?;
    }

    if matches.subcommand_matches("gen-index").is_some() {
        index::generate(&ROOT_DIR)?;
    }

    Ok(())
}
