// src/cli.rs
use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use crate::commands::render::{OutputFormat, RenderArgs};
use crate::commands::{self, GlobalOptions};
use crate::core::ThemeMode;
use crate::infra::environment::preferred_languages;
use crate::infra::{logging, t};

pub fn build_cli(locale: &str) -> Command {
    Command::new("lifecycle-diagram")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("storage")
                .long("storage")
                .help(t!("cli.storage", locale = locale).to_string())
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("ephemeral")
                .long("ephemeral")
                .help(t!("cli.ephemeral", locale = locale).to_string())
                .global(true)
                .conflicts_with("storage")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help(t!("cli.verbose", locale = locale).to_string())
                .global(true)
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help(t!("cli.quiet", locale = locale).to_string())
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("render")
                .about(t!("cli.render_about", locale = locale).to_string())
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help(t!("cli.format", locale = locale).to_string())
                        .value_name("FORMAT")
                        .value_parser(["html", "text"])
                        .default_value("html")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("cli.output", locale = locale).to_string())
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("theme")
                        .long("theme")
                        .help(t!("cli.theme", locale = locale).to_string())
                        .value_name("MODE")
                        .value_parser(["light", "dark", "system"])
                        .default_value("system")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("theme-file")
                        .long("theme-file")
                        .help(t!("cli.theme_file", locale = locale).to_string())
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(Command::new("show").about(t!("cli.show_about", locale = locale).to_string()))
        .subcommand(
            Command::new("toggle-advanced")
                .about(t!("cli.toggle_advanced_about", locale = locale).to_string()),
        )
        .subcommand(
            Command::new("set-locale")
                .about(t!("cli.set_locale_about", locale = locale).to_string())
                .arg(
                    Arg::new("locale")
                        .help(t!("cli.locale_value", locale = locale).to_string())
                        .value_name("LOCALE")
                        .required(true)
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("set-version")
                .about(t!("cli.set_version_about", locale = locale).to_string())
                .arg(
                    Arg::new("react-version")
                        .help(t!("cli.version_value", locale = locale).to_string())
                        .value_name("VERSION")
                        .required(true)
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(Command::new("options").about(t!("cli.options_about", locale = locale).to_string()))
}

/// Global arguments propagate down, so they are read from the subcommand's matches.
fn global_options(matches: &ArgMatches, languages: Vec<String>) -> GlobalOptions {
    GlobalOptions {
        storage: matches.get_one::<PathBuf>("storage").cloned(),
        ephemeral: matches.get_flag("ephemeral"),
        languages,
    }
}

fn render_args(matches: &ArgMatches) -> Result<RenderArgs> {
    let format = matches
        .get_one::<String>("format")
        .map(|f| f.parse::<OutputFormat>())
        .transpose()?
        .unwrap_or_default();
    let theme = matches
        .get_one::<String>("theme")
        .map(|m| m.parse::<ThemeMode>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();
    Ok(RenderArgs {
        format,
        output: matches.get_one::<PathBuf>("output").cloned(),
        theme,
        theme_file: matches.get_one::<PathBuf>("theme-file").cloned(),
    })
}

pub async fn run() -> Result<()> {
    // Help text follows the environment's language; preferences are not loaded yet.
    let languages = preferred_languages();
    let help_locale = commands::detected_locale(&languages);
    let matches = build_cli(&help_locale).get_matches();

    let Some((name, sub_matches)) = matches.subcommand() else {
        // Clap has already printed help.
        return Ok(());
    };

    logging::init_logging(logging::level_for(
        sub_matches.get_count("verbose"),
        sub_matches.get_flag("quiet"),
    ));
    let global = global_options(sub_matches, languages);

    match name {
        "render" => commands::render::execute(&global, render_args(sub_matches)?).await?,
        "show" => commands::preferences::show(&global)?,
        "toggle-advanced" => commands::preferences::toggle_advanced(&global)?,
        "set-locale" => {
            let locale = sub_matches
                .get_one::<String>("locale")
                .map(String::as_str)
                .unwrap_or_default();
            commands::preferences::set_locale(&global, locale)?
        }
        "set-version" => {
            let version = sub_matches
                .get_one::<String>("react-version")
                .map(String::as_str)
                .unwrap_or_default();
            commands::preferences::set_version(&global, version)?
        }
        "options" => commands::options::run_options_panel(&global)?,
        _ => {}
    }
    Ok(())
}
