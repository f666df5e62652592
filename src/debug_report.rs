use rulecast::{BatchReport, Dialect, LineOutcome, LineStatus};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// One stderr line per failed input line.
pub fn print_failures(report: &BatchReport, color: bool) {
    let palette = ansi::Palette::new(color);
    for outcome in report.failures() {
        eprintln!("{}", fmt_failure(outcome, &palette));
    }
}

/// Full report: every rule line, then a summary with timing.
pub fn print_report(report: &BatchReport, target: Dialect, color: bool) {
    let palette = ansi::Palette::new(color);
    eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  Converting to {target}"), ansi::CYAN)));

    eprintln!("\n{}", palette.paint("━━━ Lines ━━━", ansi::GRAY));
    let mut shown = 0;
    for outcome in &report.outcomes {
        match &outcome.status {
            LineStatus::Passthrough => continue,
            LineStatus::Converted(rules) => {
                eprintln!(
                    "  {} {} {}",
                    palette.paint(format!("{:>4}", outcome.line), ansi::GRAY),
                    palette.paint("✓", ansi::GREEN),
                    outcome.input.trim(),
                );
                for rule in rules {
                    eprintln!("       {} {}", palette.dim("→"), palette.paint(rule, ansi::BLUE));
                }
            }
            LineStatus::Failed(_) => eprintln!("{}", fmt_failure(outcome, &palette)),
        }
        shown += 1;
    }
    if shown == 0 {
        eprintln!("{}", palette.dim("  No scriptlet or redirect rules found"));
    }

    let m = &report.metrics;
    eprintln!("\n{}", palette.paint("━━━ Summary ━━━", ansi::GRAY));
    eprintln!(
        "  Lines: {}  │  Converted: {}  │  Failed: {}  │  Passthrough: {}",
        m.lines,
        palette.paint(m.converted.to_string(), ansi::GREEN),
        if m.failed > 0 { palette.paint(m.failed.to_string(), ansi::RED) } else { palette.dim("0") },
        palette.dim(m.passthrough.to_string()),
    );
    let sources = Dialect::ALL
        .iter()
        .map(|&d| format!("{} {}", d.id(), m.scriptlets_from(d)))
        .collect::<Vec<_>>()
        .join(", ");
    eprintln!(
        "  Scriptlets: {}  │  Redirects: {}  │  Emitted: {}",
        palette.paint(sources, ansi::CYAN),
        palette.paint(m.redirects.to_string(), ansi::CYAN),
        m.emitted,
    );

    eprintln!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    eprintln!("  Total: {}", palette.paint(format!("{:?}", m.total), ansi::GREEN));
    eprintln!();
}

fn fmt_failure(outcome: &LineOutcome, palette: &ansi::Palette) -> String {
    let LineStatus::Failed(err) = &outcome.status else {
        return String::new();
    };
    format!(
        "  {} {} {}\n       {} {}",
        palette.paint(format!("{:>4}", outcome.line), ansi::GRAY),
        palette.paint("✗", ansi::RED),
        outcome.input.trim(),
        palette.paint(format!("[{}]", err.kind_label()), ansi::YELLOW),
        err,
    )
}
