use std::path::PathBuf;

use chrono::Weekday;
use lexopt::{Arg, Parser, ValueExt};
use remcal::ViewMode;

#[derive(Clone, Debug)]
pub struct Options {
    pub file: Option<PathBuf>,
    pub theme: Option<String>,
    pub mode: ViewMode,
    pub week_start: Weekday,
}

#[derive(Clone, Debug)]
pub enum Command {
    Run(Options),
    Help,
    Version,
}

impl Command {
    pub fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut options = Options {
            file: None,
            theme: None,
            mode: ViewMode::Month,
            week_start: Weekday::Sun,
        };
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('f') | Arg::Long("file") => {
                    options.file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("theme") => {
                    options.theme = Some(parser.value()?.string()?);
                }
                Arg::Long("mode") => {
                    let value = parser.value()?.string()?;
                    options.mode = match value.as_str() {
                        "month" => ViewMode::Month,
                        "week" => ViewMode::Week,
                        "day" => ViewMode::Day,
                        _ => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: "expected month, week, or day".into(),
                            })
                        }
                    };
                }
                Arg::Long("week-start") => {
                    let value = parser.value()?.string()?;
                    options.week_start = match value.as_str() {
                        "sunday" | "sun" => Weekday::Sun,
                        "monday" | "mon" => Weekday::Mon,
                        _ => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: "expected sunday or monday".into(),
                            })
                        }
                    };
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(options))
    }
}

pub fn print_help() {
    println!("Usage: remcal [OPTIONS]");
    println!();
    println!("Terminal calendar for date-based reminders");
    println!();
    println!("Options:");
    println!("  -f, --file <PATH>       Reminder file (TOML); defaults to");
    println!("                          <config dir>/remcal/reminders.toml, else sample data");
    println!("      --theme <NAME>      Color preset: default, dracula, gruvbox, nord");
    println!("      --mode <MODE>       Initial view: month, week, day");
    println!("      --week-start <DAY>  First day of the week: sunday, monday");
    println!("  -h, --help              Display this help message and exit");
    println!("  -V, --version           Show the program version and exit");
}
