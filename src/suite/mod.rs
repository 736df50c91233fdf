use std::{
    error::Error as StdError,
    ffi::OsString,
    fmt::{self, Debug},
    io::{self, Write},
};

use clap::{parser::ValueSource, ArgMatches};
use tracing::{info, warn};

use crate::{
    config::{Action, Filter, Mode, OutputFormat, Sorting},
    output,
    time::{Clock, OsClock},
    Error, Measurement, Reps, Result, Timer,
};

mod report;


pub use report::Report;

type BoxError = Box<dyn StdError + Send + Sync>;

type MeasureFn<'a, C> =
    Box<dyn FnMut(&Timer<C>, Mode) -> Result<Measurement<String>, BoxError> + 'a>;

struct Candidate<'a, C> {
    name: String,
    measure: MeasureFn<'a, C>,
}

/// Times several candidates for the same job under one [`Mode`] and reports
/// the results side by side.
///
/// # Examples
///
/// ```
/// use reptime::{Mode, Reps, Suite};
///
/// let squares: Vec<f64> = (0..1000).map(f64::from).collect();
///
/// let reports = Suite::default()
///     .mode(Mode::BestOfTotal { outer: Reps::new(3)?, inner: Reps::new(10)? })
///     .candidate("sqrt", || squares.iter().map(|x| x.sqrt()).sum::<f64>())
///     .candidate("powf", || squares.iter().map(|x| x.powf(0.5)).sum::<f64>())
///     .run()?;
///
/// assert_eq!(reports.len(), 2);
/// assert_eq!(reports[0].name, "sqrt");
/// # Ok::<(), reptime::Error>(())
/// ```
pub struct Suite<'a, C = OsClock> {
    timer: Timer<C>,
    mode: Mode,
    action: Action,
    format: OutputFormat,
    sorting: Sorting,
    filter: Option<Filter>,
    skip_filters: Vec<Filter>,
    candidates: Vec<Candidate<'a, C>>,
}

impl<C> fmt::Debug for Suite<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite").field("mode", &self.mode).finish_non_exhaustive()
    }
}

impl Default for Suite<'_> {
    fn default() -> Self {
        Self::new(Timer::default())
    }
}

impl<'a, C: Clock> Suite<'a, C> {
    /// Creates an empty suite measuring with `timer`.
    pub fn new(timer: Timer<C>) -> Self {
        Self {
            timer,
            mode: Mode::default(),
            action: Action::default(),
            format: OutputFormat::default(),
            sorting: Sorting::default(),
            filter: None,
            skip_filters: Vec::new(),
            candidates: Vec::new(),
        }
    }

    /// Adds a candidate.
    ///
    /// The candidate's last return value is formatted with [`Debug`] after
    /// timing completes, so formatting cost is not measured.
    #[must_use]
    pub fn candidate<O, F>(self, name: impl Into<String>, mut f: F) -> Self
    where
        O: Debug,
        F: FnMut() -> O + 'a,
    {
        self.try_candidate(name, move || Ok::<_, std::convert::Infallible>(f()))
    }

    /// Adds a candidate that may fail.
    ///
    /// The first error ends [`run`](Self::run) with [`Error::Candidate`].
    #[must_use]
    pub fn try_candidate<O, E, F>(mut self, name: impl Into<String>, mut f: F) -> Self
    where
        O: Debug,
        E: Into<BoxError>,
        F: FnMut() -> Result<O, E> + 'a,
    {
        let measure =
            move |timer: &Timer<C>, mode: Mode| -> Result<Measurement<String>, BoxError> {
                let measurement = match mode {
                    Mode::Total { reps } => timer.try_total(reps, &mut f),
                    Mode::BestOf { reps } => timer.try_bestof(reps, &mut f),
                    Mode::BestOfTotal { outer, inner } => {
                        timer.try_bestoftotal(outer, inner, &mut f)
                    }
                };

                measurement.map(|m| m.map(|result| format!("{result:?}"))).map_err(Into::into)
            };

        self.candidates.push(Candidate { name: name.into(), measure: Box::new(measure) });
        self
    }

    /// Runs all candidates matching the configured filters, in the order they
    /// were added, then sorts the reports.
    pub fn run(&mut self) -> Result<Vec<Report>> {
        let mode = self.mode;
        let timer = &self.timer;
        let filter = self.filter.as_ref();
        let skip_filters = &self.skip_filters;

        let selected: Vec<&mut Candidate<'a, C>> = self
            .candidates
            .iter_mut()
            .filter(|c| is_selected(&c.name, filter, skip_filters))
            .collect();

        if selected.is_empty() {
            warn!("no candidates selected");
        }

        let mut reports = Vec::with_capacity(selected.len());

        for candidate in selected {
            info!(candidate = %candidate.name, %mode, "measuring");

            let measurement = (candidate.measure)(timer, mode)
                .map_err(|source| Error::Candidate { name: candidate.name.clone(), source })?;

            info!(candidate = %candidate.name, duration = ?measurement.duration, "measured");

            reports.push(Report::new(&candidate.name, mode, measurement));
        }

        match self.sorting {
            Sorting::Registration => {}
            Sorting::Name => reports.sort_by(|a, b| a.name.cmp(&b.name)),
            Sorting::Time => reports.sort_by(|a, b| {
                a.duration.cmp(&b.duration).then_with(|| a.name.cmp(&b.name))
            }),
        }

        Ok(reports)
    }

    /// Returns the names of candidates matching the configured filters.
    pub fn list(&self) -> Vec<&str> {
        self.candidates
            .iter()
            .map(|c| c.name.as_str())
            .filter(|name| is_selected(name, self.filter.as_ref(), &self.skip_filters))
            .collect()
    }

    /// Performs the configured action, writing output to `out`.
    ///
    /// Listing returns no reports.
    pub fn run_to(&mut self, mut out: impl Write) -> Result<Vec<Report>> {
        match self.action {
            Action::List => {
                for name in self.list() {
                    writeln!(out, "{name}")?;
                }
                Ok(Vec::new())
            }
            Action::Run => {
                let reports = self.run()?;
                output::write(&reports, self.mode, self.format, &mut out)?;
                Ok(reports)
            }
        }
    }

    /// Configures the suite from CLI arguments and environment variables,
    /// performs the configured action, and prints to stdout.
    ///
    /// Exits the process with a non-zero status on failure.
    pub fn main(self) {
        let mut suite = self.config_with_args();

        if let Err(err) = suite.run_to(io::stdout().lock()) {
            let _ = write_error(&err, io::stderr().lock());
            std::process::exit(1);
        }
    }
}

/// Reports a failed run, once, without going through `tracing`.
fn write_error(err: &Error, mut out: impl Write) -> io::Result<()> {
    writeln!(out, "error: {err}")
}

/// Configuration options.
impl<C: Clock> Suite<'_, C> {
    /// Sets options by parsing CLI arguments and `REPTIME_*` environment
    /// variables.
    ///
    /// This may override any previously-set options. Invalid values exit the
    /// process with a usage error.
    #[must_use]
    pub fn config_with_args(self) -> Self {
        let mut command = crate::cli::command();
        let matches = command.get_matches_mut();

        match self.config_with_matches(&matches) {
            Ok(suite) => suite,
            Err(error) => {
                let kind = clap::error::ErrorKind::ValueValidation;
                command.error(kind, error).exit();
            }
        }
    }

    /// Sets options by parsing `args` as CLI arguments, where the first item
    /// is the program name.
    ///
    /// Unlike [`config_with_args`](Self::config_with_args), errors are
    /// returned rather than exiting the process.
    pub fn config_with_args_from<I, T>(self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = crate::cli::command().try_get_matches_from(args)?;
        self.config_with_matches(&matches)
    }

    fn config_with_matches(mut self, matches: &ArgMatches) -> Result<Self> {
        let is_exact = matches.get_flag("exact");

        if let Some(filter) = matches.get_one::<String>("filter") {
            self.filter = Some(Filter::new(filter, is_exact)?);
        }

        if let Some(skip_filters) = matches.get_many::<String>("skip") {
            for skip_filter in skip_filters {
                self.skip_filters.push(Filter::new(skip_filter, is_exact)?);
            }
        }

        if matches.get_flag("list") {
            self.action = Action::List;
        }

        let reps = matches.get_one::<i64>("reps").map(|&n| Reps::try_from(n)).transpose()?;
        let inner = matches.get_one::<i64>("inner").map(|&n| Reps::try_from(n)).transpose()?;
        let mode_name = matches.get_one::<String>("mode").map_or(self.mode.name(), String::as_str);

        let (current_reps, current_inner) = match self.mode {
            Mode::Total { reps } | Mode::BestOf { reps } => (reps, Mode::DEFAULT_INNER),
            Mode::BestOfTotal { outer, inner } => (outer, inner),
        };
        let reps = reps.unwrap_or(current_reps);
        let inner = inner.unwrap_or(current_inner);

        self.mode = match mode_name {
            "total" => Mode::Total { reps },
            "best-of" => Mode::BestOf { reps },
            _ => Mode::BestOfTotal { outer: reps, inner },
        };

        // `REPTIME_INNER` may be set for a whole session, so only an explicit
        // flag is an error.
        let inner_from_cli = matches.value_source("inner") == Some(ValueSource::CommandLine);
        if inner_from_cli && !matches!(self.mode, Mode::BestOfTotal { .. }) {
            return Err(Error::InnerRepsUnused { mode: self.mode.name() });
        }

        if let Some(Ok(format)) = matches.get_one::<String>("format").map(|f| f.parse()) {
            self.format = format;
        }

        if let Some(Ok(sorting)) = matches.get_one::<String>("sort").map(|s| s.parse()) {
            self.sorting = sorting;
        }

        Ok(self)
    }

    /// Sets the timing operation.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the output style used by [`run_to`](Self::run_to).
    #[must_use]
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the report order.
    #[must_use]
    pub fn sort_by(mut self, sorting: Sorting) -> Self {
        self.sorting = sorting;
        self
    }

    /// Only runs candidates whose names match `pattern` as a regular
    /// expression.
    ///
    /// This option is equivalent to the `NAME` CLI argument.
    pub fn filter(mut self, pattern: &str) -> Result<Self> {
        self.filter = Some(Filter::new(pattern, false)?);
        Ok(self)
    }

    /// Only runs the candidate named exactly `name`.
    ///
    /// This option is equivalent to `NAME --exact`.
    #[must_use]
    pub fn filter_exact(mut self, name: impl Into<String>) -> Self {
        self.filter = Some(Filter::Exact(name.into()));
        self
    }

    /// Skips candidates whose names match `pattern` as a regular expression.
    ///
    /// This option is equivalent to the `--skip` CLI argument.
    pub fn skip(mut self, pattern: &str) -> Result<Self> {
        self.skip_filters.push(Filter::new(pattern, false)?);
        Ok(self)
    }
}

fn is_selected(name: &str, filter: Option<&Filter>, skip_filters: &[Filter]) -> bool {
    if let Some(filter) = filter {
        if !filter.is_match(name) {
            return false;
        }
    }

    !skip_filters.iter().any(|filter| filter.is_match(name))
}
