mod app;
mod help;
mod picker;
mod theme;
use crate::app::App;
use crate::picker::{DateBounds, Period, RangePicker};
use crate::theme::CalendarTheme;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Pick(Options),
    Help,
    Version,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Options {
    display: Option<Date>,
    min: Option<Date>,
    max: Option<Date>,
    start: Option<Date>,
    end: Option<Date>,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut opts = Options::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Long("min") => opts.min = Some(parse_date(parser.value()?.string()?)?),
                Arg::Long("max") => opts.max = Some(parse_date(parser.value()?.string()?)?),
                Arg::Long("start") => opts.start = Some(parse_date(parser.value()?.string()?)?),
                Arg::Long("end") => opts.end = Some(parse_date(parser.value()?.string()?)?),
                Arg::Value(value) if opts.display.is_none() => {
                    opts.display = Some(parse_date(value.string()?)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Pick(opts))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Pick(opts) => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let bounds = DateBounds::new(opts.min, opts.max)?;
                let initial = match (opts.start, opts.end) {
                    (Some(a), Some(b)) => Some(Period::new(a, b)),
                    (None, None) => None,
                    _ => anyhow::bail!("--start and --end must be given together"),
                };
                let display = opts.display.or_else(|| initial.map(Period::start));
                let picked = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let mut picker = RangePicker::new(today, bounds, |_: Period| ());
                    if let Some(period) = initial {
                        picker = picker.with_period(period);
                    }
                    if let Some(date) = display {
                        picker = picker.displayed_date(date);
                    }
                    let picked = App::new(picker, CalendarTheme::default()).run(&mut terminal)?;
                    Ok(picked)
                })?;
                if let Some(period) = picked {
                    println!("{}/{}", period.start(), period.end());
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: datespan [<options>] [YYYY-MM-DD]");
                println!();
                println!("Pick an inclusive date range from a two-month terminal calendar");
                println!();
                println!("The optional argument selects the month shown on startup.");
                println!();
                println!("Options:");
                println!("  --min <DATE>      Earliest selectable date");
                println!("  --max <DATE>      Latest selectable date");
                println!("  --start <DATE>    Start of an initially-selected period");
                println!("  --end <DATE>      End of an initially-selected period");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn parse_date(value: String) -> Result<Date, lexopt::Error> {
    match Date::parse(&value, &YMD_FMT) {
        Ok(d) => Ok(d),
        Err(e) => Err(lexopt::Error::ParsingFailed {
            value,
            error: Box::new(e),
        }),
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
