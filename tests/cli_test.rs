//! Argument parsing and option layering for the boxtree binary

use std::ffi::OsStr;
use std::io::Write;

use boxtree::cli::args::{Cli, Commands, ConfigCommands, RenderArgs};
use boxtree::cli::commands::effective_options;
use boxtree::outline::parse_outline;
use boxtree::{Color, Orientation, TreePrinter};
use clap::{CommandFactory, Parser};
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(content.as_bytes()).expect("write temp config");
    file
}

#[test]
fn given_render_flags_when_parsing_then_fields_are_set() {
    let cli = Cli::try_parse_from([
        "boxtree",
        "-dd",
        "render",
        "tree.txt",
        "--color",
        "light-blue",
        "--border",
        "--trim",
        "-1",
        "--max-depth",
        "2",
    ])
    .unwrap();

    assert_eq!(cli.debug, 2);
    let Some(Commands::Render(args)) = cli.command else {
        panic!("expected render command");
    };
    assert_eq!(args.file.unwrap().to_str(), Some("tree.txt"));
    assert_eq!(args.color, Some(Color::LightBlue));
    assert!(args.border);
    assert_eq!(args.trim, Some(-1));
    assert_eq!(args.max_depth, Some(2));
    assert_eq!(args.depth, 0);
}

#[test]
fn given_config_subcommand_when_parsing_then_recognized() {
    let cli = Cli::try_parse_from(["boxtree", "config", "template"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Template
        })
    ));
}

#[test]
fn given_config_flag_when_inspecting_then_env_fallback_is_boxtree_config() {
    let cmd = Cli::command();
    let config = cmd
        .get_arguments()
        .find(|arg| arg.get_id() == "config")
        .expect("config argument");
    assert_eq!(config.get_env(), Some(OsStr::new("BOXTREE_CONFIG")));
}

#[test]
fn given_unknown_color_when_parsing_then_rejected() {
    assert!(Cli::try_parse_from(["boxtree", "render", "--color", "mauve"]).is_err());
}

#[test]
fn given_config_file_when_resolving_options_then_file_values_apply() {
    let file = config_file("color = \"none\"\ntrim_length = 4\n");
    let options = effective_options(Some(file.path()), &RenderArgs::default()).unwrap();

    assert_eq!(options.color, Color::None);
    assert_eq!(options.trim_length, Some(4));
    assert_eq!(options.max_depth, None);
}

#[test]
fn given_flags_and_config_file_when_resolving_options_then_flags_win() {
    let file = config_file("color = \"none\"\nborder = false\nmax_depth = 3\n");
    let args = RenderArgs {
        color: Some(Color::Green),
        border: true,
        max_depth: Some(-1),
        orientation: Some(Orientation::Horizontal),
        ..Default::default()
    };
    let options = effective_options(Some(file.path()), &args).unwrap();

    assert_eq!(options.color, Color::Green);
    assert!(options.border);
    assert_eq!(options.max_depth, None);
    assert_eq!(options.orientation, Orientation::Horizontal);
}

#[test]
fn given_malformed_config_file_when_resolving_options_then_error_names_file() {
    let file = config_file("color = [1, 2]\n");
    let err = effective_options(Some(file.path()), &RenderArgs::default()).unwrap_err();
    assert!(err.to_string().contains("parse"));
    assert_eq!(err.exit_code(), boxtree::exitcode::CONFIG);
}

#[test]
fn given_outline_when_rendering_like_the_cli_then_draws_tree() {
    let file = config_file("color = \"none\"\n");
    let options = effective_options(Some(file.path()), &RenderArgs::default()).unwrap();
    let arena = parse_outline("R\n  A\n  B\n").unwrap();
    let root = arena.root().unwrap();

    let out = TreePrinter::new(arena, options).render(&root, 0).unwrap();
    assert_eq!(out, "  [R]\n ┌─┴─┐\n[A] [B]");
}
