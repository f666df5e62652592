mod debug_report;

use log::{LevelFilter, Log, Metadata, Record};
use rulecast::{Dialect, Options, convert_list};
use std::io::{self, IsTerminal, Read};

const DEBUG_ENV: &str = "RULECAST_DEBUG";

fn main() {
    init_logger();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let report = convert_list(&config.input, &config.options);
    if !config.check {
        for line in &report.output {
            println!("{line}");
        }
    }
    if config.check || config.report {
        debug_report::print_report(&report, config.options.target, config.color);
    } else {
        debug_report::print_failures(&report, config.color);
    }

    if report.has_failures() {
        std::process::exit(1);
    }
}

// --- Logging -----------------------------------------------------------------

/// Writes engine log records to stderr. Installed only when `RULECAST_DEBUG`
/// is set (`1`/`debug` or `trace`).
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger() {
    let level = match std::env::var(DEBUG_ENV) {
        Ok(value) if value.eq_ignore_ascii_case("trace") => LevelFilter::Trace,
        Ok(value) if !value.is_empty() && value != "0" => LevelFilter::Debug,
        _ => return,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

// --- Arguments ---------------------------------------------------------------

struct CliConfig {
    input: String,
    options: Options,
    check: bool,
    report: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut options = Options::default();
    let mut check = false;
    let mut report = false;
    let mut color = io::stderr().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("rulecast {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--check" => check = true,
            "--report" => report = true,
            "--drop-unrelated" => options.passthrough = false,
            "-t" | "--to" => {
                let value = args.next().ok_or_else(|| "error: --to expects a dialect".to_string())?;
                options.target = parse_dialect(&value)?;
            }
            "-i" | "--input" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.by_ref().collect::<Vec<_>>();
                if !rest.is_empty() {
                    set_input(&mut input, rest.join("\n"))?;
                }
                break;
            }
            _ if arg.starts_with("--to=") => options.target = parse_dialect(arg.trim_start_matches("--to="))?,
            _ if arg.starts_with("--input=") => set_input(&mut input, arg.trim_start_matches("--input=").to_string())?,
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                // Each remaining argument is one rule.
                let rest = std::iter::once(arg).chain(args.by_ref()).collect::<Vec<_>>().join("\n");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, options, check, report, color })
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(value);
    Ok(())
}

fn parse_dialect(value: &str) -> Result<Dialect, String> {
    value.parse::<Dialect>().map_err(|err| format!("error: {err}"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "rulecast {version}

Convert scriptlet and redirect rules between AdGuard, uBlock Origin and
Adblock Plus filter-list syntax.

Usage:
  rulecast [OPTIONS] [--] <rule...>
  rulecast [OPTIONS] --input <text>
  rulecast [OPTIONS] < filters.txt

Options:
  -t, --to <dialect>         Target dialect: adg, ubo or abp. Default: adg.
  -i, --input <text>         Rules to convert, one per line. If omitted, reads
                             remaining args (one rule each) or stdin.
  --check                    Do not print rules; report what would fail.
  --drop-unrelated           Leave comments and unrelated lines out of the output.
  --report                   Print a per-line report and summary to stderr.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {debug_env}=1|trace       Log engine decisions to stderr.

Exit codes:
  0  Success.
  1  At least one rule failed to convert.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        debug_env = DEBUG_ENV,
    )
}
