//! BrandKit - brand and logo generator
//!
//! Runs the studio web server or performs one-off conversions and exports
//! from the command line.

use brandkit::branding::APP_DESCRIPTION;
use brandkit::cli::{ColorArgs, ConfigArgs, ExitCode, KitArgs, LogoArgs, StyleArgs};
#[cfg(feature = "web")]
use brandkit::cli::ServeArgs;
use clap::{Parser, Subcommand};

/// BrandKit - brand and logo generator
#[derive(Parser, Debug)]
#[command(author, version, about = APP_DESCRIPTION, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the studio web server
    #[cfg(feature = "web")]
    Serve(ServeArgs),
    /// Convert a hex color to rgb() and hsl()
    Color(ColorArgs),
    /// Show the typography profile for a vibe
    Style(StyleArgs),
    /// Render a text logo as SVG
    Logo(LogoArgs),
    /// Build a brand kit (JSON or zip)
    Kit(KitArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures
            let code = if e.use_stderr() {
                ExitCode::ValidationError
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            std::process::exit(code.code());
        }
    };

    let result = match &cli.command {
        #[cfg(feature = "web")]
        Command::Serve(args) => args.execute(),
        Command::Color(args) => args.execute(),
        Command::Style(args) => args.execute(),
        Command::Logo(args) => args.execute(),
        Command::Kit(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    match result {
        Ok(()) => std::process::exit(ExitCode::Success.code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code().code());
        }
    }
}
