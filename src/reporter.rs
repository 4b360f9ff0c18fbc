use std::{
    borrow::Cow,
    io,
    ops::ControlFlow,
    path::{Path, PathBuf},
};

use crate::{
    color::{Color, ColorSetting, SupportsColor, colors::RESET},
    options::RunOptions,
    result::{ResultSet, TestResult},
    session::RunStatus,
};

/// Sentinel returned from [`Reporter::record`] when fail-fast stops the run.
///
/// This replaces interrupt-style control flow: the driver checks for it after
/// every `record` call and terminates the run cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Aborted;

pub const DEFAULT_EXECUTABLE: &str = "bin/test";

/// Renders test results to a writable stream as they arrive and summarizes
/// failures at the end of the run.
///
/// The reporter owns its target like the formatters it plugs in for; tests
/// hand it a shared buffer via [`Reporter::with_target`].
#[derive(Debug)]
pub struct Reporter<W: io::Write> {
    target: W,
    options: RunOptions,
    executable: Cow<'static, str>,
    app_root: Option<PathBuf>,
    results: ResultSet,
}

impl Default for Reporter<io::Stdout> {
    fn default() -> Self {
        Self {
            target: io::stdout(),
            options: RunOptions::default(),
            executable: Cow::Borrowed(DEFAULT_EXECUTABLE),
            app_root: None,
            results: ResultSet::new(),
        }
    }
}

impl<W: io::Write> Reporter<W> {
    pub fn with_target<WithTarget: io::Write>(
        self,
        with_target: WithTarget,
    ) -> Reporter<WithTarget> {
        Reporter {
            target: with_target,
            options: self.options,
            executable: self.executable,
            app_root: self.app_root,
            results: self.results,
        }
    }

    pub fn with_options(self, options: RunOptions) -> Self {
        Self { options, ..self }
    }

    /// Set the command prefix used in rerun snippets.
    pub fn with_executable(self, executable: impl Into<Cow<'static, str>>) -> Self {
        Self {
            executable: executable.into(),
            ..self
        }
    }

    /// Set the application root that rerun-snippet paths are made relative to.
    pub fn with_app_root(self, app_root: impl Into<PathBuf>) -> Self {
        Self {
            app_root: Some(app_root.into()),
            ..self
        }
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Every recorded result, in arrival order.
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Recorded results with skips excluded, unless the run is verbose.
    pub fn filtered_results(&self) -> impl Iterator<Item = &TestResult> {
        self.results
            .iter()
            .filter(|result| self.options.verbose || !result.skipped())
    }

    /// A copy-pasteable command to re-execute just this test.
    ///
    /// Prefers the assertion location from the bracketed suffix of the
    /// result's location string, falls back to the declared origin of the
    /// test function, and degrades to the bare executable when neither is
    /// known.
    pub fn rerun_snippet(&self, result: &TestResult) -> String {
        let path = result.assertion_path().map(str::to_owned).or_else(|| {
            result
                .origin
                .as_ref()
                .map(|origin| format!("{}:{}", origin.file.display(), origin.line))
        });

        match path {
            Some(path) => format!("{} {}", self.executable, self.relative_path_for(&path)),
            None => self.executable.to_string(),
        }
    }

    /// Strip the application root from `path`, leaving it untouched when no
    /// root is configured or the path lives outside it.
    pub fn relative_path_for(&self, path: &str) -> String {
        let Some(root) = &self.app_root else {
            return path.to_string();
        };
        match Path::new(path).strip_prefix(root) {
            Ok(relative) => relative.display().to_string(),
            Err(_) => path.to_string(),
        }
    }
}

impl<W: io::Write + SupportsColor> Reporter<W> {
    /// Return whether this reporter will currently emit colored output.
    pub fn use_color(&self) -> bool {
        match self.options.color {
            ColorSetting::Automatic => self.target.supports_color(),
            ColorSetting::Always => true,
            ColorSetting::Never => false,
        }
    }

    fn color_output<'s>(&self, string: &'s str, color: Color) -> Cow<'s, str> {
        match self.use_color() {
            true => Cow::Owned(format!("{}{string}{RESET}", color.prefix())),
            false => Cow::Borrowed(string),
        }
    }

    /// Record one result: print its progress output (and, in inline mode,
    /// its failure block), then append it to the result set.
    ///
    /// Returns [`ControlFlow::Break`] when fail-fast is on and the outcome is
    /// a genuine failure; errors and skips never abort.
    pub fn record(&mut self, result: TestResult) -> io::Result<ControlFlow<Aborted>> {
        let color = result.outcome.color();

        if self.options.verbose {
            let line = format!(
                "{}#{} = {:.2} s = {}",
                result.group,
                result.name,
                result.duration.as_secs_f64(),
                result.outcome.glyph(),
            );
            let line = self.color_output(&line, color);
            writeln!(self.target, "{line}")?;
        } else {
            let glyph = result.outcome.glyph().to_string();
            let glyph = self.color_output(&glyph, color);
            write!(self.target, "{glyph}")?;
        }

        if self.options.output_inline
            && (!result.skipped() || self.options.verbose)
            && let Some(detail) = result.failure()
        {
            let block = format!(
                "{}:\n{}#{}:\n{}",
                detail.label, result.group, result.name, detail.message,
            );
            let block = self.color_output(&block, color).into_owned();
            let snippet = self.rerun_snippet(&result);
            writeln!(self.target)?;
            writeln!(self.target)?;
            writeln!(self.target, "{block}")?;
            writeln!(self.target)?;
            writeln!(self.target, "{snippet}")?;
            writeln!(self.target)?;
        }

        let aborts = self.options.fail_fast && result.outcome.failed();
        self.results.push(result);

        match aborts {
            true => Ok(ControlFlow::Break(Aborted)),
            false => Ok(ControlFlow::Continue(())),
        }
    }

    /// Print the end-of-run failure summary.
    ///
    /// Does nothing in inline mode (failures were already shown as they
    /// happened) or when no qualifying result carries a failure.
    pub fn report(&mut self) -> io::Result<()> {
        if self.options.output_inline {
            return Ok(());
        }

        let snippets: Vec<String> = self
            .filtered_results()
            .filter(|result| result.failure().is_some())
            .map(|result| self.rerun_snippet(result))
            .collect();
        if snippets.is_empty() {
            return Ok(());
        }

        writeln!(self.target)?;
        writeln!(self.target, "Failed tests:")?;
        writeln!(self.target)?;
        for snippet in snippets {
            writeln!(self.target, "{snippet}")?;
        }
        Ok(())
    }

    /// Record a sequence of results synchronously, then summarize.
    ///
    /// A `crossbeam_channel::Receiver` is such a sequence, so single-threaded
    /// drivers can drain a channel directly. Stops early with
    /// [`RunStatus::Aborted`] when fail-fast triggers; the summary is only
    /// printed for runs that complete.
    pub fn drain<I>(&mut self, results: I) -> io::Result<RunStatus>
    where
        I: IntoIterator<Item = TestResult>,
    {
        for result in results {
            if let ControlFlow::Break(Aborted) = self.record(result)? {
                return Ok(RunStatus::Aborted);
            }
        }
        self.report()?;
        Ok(RunStatus::Completed)
    }
}
