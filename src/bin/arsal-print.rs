#![deny(unsafe_code)]

//! Prints one leveled, tagged line through the print facade.
//!
//! ```text
//! arsal-print --level warning --tag Updater "battery at 12%"
//! ```

use arsal::print::{BuildMode, Level, PrintConfig, Printer, arsal_print};
use arsal::print_sink::{ConsoleSink, ConsoleStream, TagMode};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::ffi::OsString;
use std::process::ExitCode;

fn command() -> Command {
    Command::new("arsal-print")
        .about("Print a leveled, tagged, timestamped line")
        .arg(
            Arg::new("level")
                .short('l')
                .long("level")
                .value_name("LEVEL")
                .help("error, warning or debug")
                .value_parser(value_parser!(Level))
                .default_value("error"),
        )
        .arg(
            Arg::new("tag")
                .short('t')
                .long("tag")
                .value_name("TAG")
                .default_value("ARSAL"),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .value_name("MODE")
                .help("debug or release; defaults to ARSAL_PRINT_MODE, then the build")
                .value_parser(value_parser!(BuildMode)),
        )
        .arg(
            Arg::new("bare")
                .long("bare")
                .help("omit the [LVL] TAG prefix")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("write to standard output instead of standard error")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("message")
                .value_name("MESSAGE")
                .required(true)
                .num_args(1..),
        )
}

fn printer(matches: &ArgMatches) -> Printer<ConsoleSink> {
    let mut config = PrintConfig::from_env_or_default();
    if let Some(mode) = matches.get_one::<BuildMode>("mode") {
        config = config.with_mode(*mode);
    }
    let stream = if matches.get_flag("stdout") {
        ConsoleStream::Stdout
    } else {
        ConsoleStream::Stderr
    };
    let tag_mode = TagMode::from(!matches.get_flag("bare"));
    Printer::new(config, ConsoleSink::new(stream, tag_mode))
}

fn run<I>(args: I) -> Result<(), clap::Error>
where
    I: IntoIterator<Item = OsString>,
{
    let matches = command().try_get_matches_from(args)?;
    let printer = printer(&matches);
    let level = matches.get_one::<Level>("level").copied().unwrap_or(Level::Error);
    let tag = matches
        .get_one::<String>("tag")
        .map_or("ARSAL", String::as_str);
    let message = matches
        .get_many::<String>("message")
        .into_iter()
        .flatten()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    arsal_print!(printer: &printer, level, tag, "{}", message);
    Ok(())
}

fn main() -> ExitCode {
    match run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = err.print();
            ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
        }
    }
}
