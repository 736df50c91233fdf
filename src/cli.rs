use clap::{value_parser, Arg, ArgAction, Command};

pub(crate) fn command() -> Command {
    fn reps_arg(name: &'static str) -> Arg {
        // Signed so that negative counts reach `Reps::try_from` and are
        // reported by the crate's own error.
        Arg::new(name)
            .long(name)
            .value_name("N")
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
    }

    Command::new("reptime")
        .arg(
            Arg::new("filter")
                .value_name("NAME")
                .help("Only run candidates whose names match this pattern"),
        )
        .arg(
            Arg::new("exact")
                .long("exact")
                .help("Filter candidates by exact name rather than by pattern")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("skip")
                .long("skip")
                .value_name("NAME")
                .help("Skip candidates whose names match this pattern")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("Lists candidates")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .env("REPTIME_MODE")
                .help("Timing operation applied to each candidate")
                .value_parser(["total", "best-of", "best-of-total"]),
        )
        .arg(
            reps_arg("reps")
                .env("REPTIME_REPS")
                .help("Repetitions, or the number of totals for best-of-total"),
        )
        .arg(
            reps_arg("inner")
                .env("REPTIME_INNER")
                .help("Repetitions within each total; only used by best-of-total"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .env("REPTIME_FORMAT")
                .help("Configure formatting of output")
                .value_parser(["pretty", "terse", "json"]),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .env("REPTIME_SORT")
                .help("Order in which reports are printed")
                .value_parser(["registration", "name", "time"]),
        )
}
