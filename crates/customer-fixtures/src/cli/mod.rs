//! Command-line front end for the generator.
//!
//! The binary delegates to [`run`] so the prompt, banners and progress output
//! can be exercised in tests against in-memory streams without spawning a
//! process.

mod error;

use std::io::{self, BufRead, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;
use mockable::Clock;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

pub use error::CliError;

use crate::config::GeneratorSettings;
use crate::count::{CountResolution, DEFAULT_COUNT, output_file_name, resolve_count};
use crate::writer::{GenerationReport, GenerationRequest, ProgressObserver, generate_to_file};

/// `customer-fixtures` command arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "customer-fixtures",
    about = "Generate synthetic customer and contract XML fixtures",
    version
)]
pub struct CliArgs {
    /// Number of customers to generate. Prompted for when omitted; invalid
    /// values fall back to 20000.
    #[arg(long, value_name = "n", allow_hyphen_values = true)]
    pub count: Option<String>,
    /// Directory that receives `customers_<n>.xml`.
    #[arg(long = "output-dir", value_name = "path")]
    pub output_dir: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long, value_name = "seed")]
    pub seed: Option<u64>,
    /// Records between progress lines.
    #[arg(long = "progress-interval", value_name = "n")]
    pub progress_interval: Option<u32>,
    /// Wait for Enter before exiting.
    #[arg(long)]
    pub pause: bool,
}

/// Fully resolved parameters of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    count: CountResolution,
    output_dir: Utf8PathBuf,
    seed: u64,
    progress_interval: NonZeroU32,
}

impl RunPlan {
    /// Combines flags, loaded settings and the raw count input.
    ///
    /// Flags take precedence over settings. A missing seed is drawn from the
    /// thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NonUtf8Path`] for a non-UTF-8 output directory and
    /// [`CliError::InvalidProgressInterval`] for a zero progress interval.
    ///
    /// # Example
    ///
    /// ```
    /// use customer_fixtures::GeneratorSettings;
    /// use customer_fixtures::cli::{CliArgs, RunPlan};
    ///
    /// let args = CliArgs {
    ///     seed: Some(7),
    ///     ..CliArgs::default()
    /// };
    /// let settings = GeneratorSettings {
    ///     progress_interval: 1000,
    ///     output_dir: None,
    ///     seed: None,
    /// };
    /// let plan = RunPlan::resolve(&args, &settings, "0").expect("plan resolves");
    ///
    /// assert_eq!(plan.file_name(), "customers_20000.xml");
    /// assert_eq!(plan.seed(), 7);
    /// ```
    pub fn resolve(
        args: &CliArgs,
        settings: &GeneratorSettings,
        raw_count: &str,
    ) -> Result<Self, CliError> {
        let dir = args
            .output_dir
            .clone()
            .unwrap_or_else(|| settings.output_dir());
        let output_dir =
            Utf8PathBuf::from_path_buf(dir).map_err(|path| CliError::NonUtf8Path { path })?;

        let progress_interval =
            NonZeroU32::new(args.progress_interval.unwrap_or(settings.progress_interval))
                .ok_or(CliError::InvalidProgressInterval)?;

        Ok(Self {
            count: resolve_count(raw_count),
            output_dir,
            seed: args.seed.or(settings.seed).unwrap_or_else(random_seed),
            progress_interval,
        })
    }

    /// How the count was resolved.
    #[must_use]
    pub const fn count(&self) -> &CountResolution {
        &self.count
    }

    /// Seed for the random source.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Output directory.
    #[must_use]
    pub fn output_dir(&self) -> &Utf8Path {
        &self.output_dir
    }

    /// Output file name, `customers_<n>.xml`.
    #[must_use]
    pub fn file_name(&self) -> String {
        output_file_name(self.count.count())
    }

    /// Output directory joined with the file name.
    #[must_use]
    pub fn output_path(&self) -> Utf8PathBuf {
        self.output_dir.join(self.file_name())
    }

    /// Generation request for this plan.
    #[must_use]
    pub const fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.count.count()).with_progress_interval(self.progress_interval)
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    /// Path of the written document.
    pub path: Utf8PathBuf,
    /// Seed used for the random source.
    pub seed: u64,
    /// Records and bytes written.
    pub report: GenerationReport,
}

/// Runs the interactive generator against the supplied streams.
///
/// Prints the banner, prompts for a count on `input` when `args.count` is
/// absent, generates the document and prints the completion summary. With
/// `args.pause` set it waits for one more line of input before returning.
///
/// # Errors
///
/// Returns [`CliError`] when settings are invalid, the console streams fail
/// or the document cannot be written.
pub fn run<I, O>(
    args: &CliArgs,
    settings: &GeneratorSettings,
    input: &mut I,
    output: &mut O,
    clock: &dyn Clock,
) -> Result<RunOutcome, CliError>
where
    I: BufRead,
    O: Write,
{
    writeln!(output, "=== Customer XML Generator ===")?;
    let raw_count = match &args.count {
        Some(raw) => raw.clone(),
        None => prompt_count(input, output)?,
    };

    let plan = RunPlan::resolve(args, settings, &raw_count)?;
    if let CountResolution::Defaulted { input: rejected } = plan.count() {
        warn!(
            input = %rejected,
            default = DEFAULT_COUNT.get(),
            "invalid customer count; using default"
        );
        writeln!(output, "Invalid number. Using default: {DEFAULT_COUNT}")?;
    }

    let outcome = execute(&plan, output, clock)?;

    if args.pause {
        wait_for_enter(input, output)?;
    }
    Ok(outcome)
}

/// Asks for the number of customers and returns the raw answer.
///
/// An answer that is not valid UTF-8 is treated as empty, which resolves to
/// the default count.
///
/// # Errors
///
/// Returns [`CliError::Console`] when the prompt cannot be written or the
/// input cannot be read.
pub fn prompt_count<I, O>(input: &mut I, output: &mut O) -> Result<String, CliError>
where
    I: BufRead,
    O: Write,
{
    write!(output, "Enter number of customers to generate (e.g., 20000): ")?;
    output.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => Ok(line),
        Err(err) if err.kind() == io::ErrorKind::InvalidData => {
            warn!(error = %err, "count input is not valid UTF-8");
            Ok(String::new())
        }
        Err(err) => Err(err.into()),
    }
}

fn execute<O>(plan: &RunPlan, output: &mut O, clock: &dyn Clock) -> Result<RunOutcome, CliError>
where
    O: Write,
{
    let file_name = plan.file_name();
    let path = plan.output_path();
    writeln!(output, "\nGenerating {} customers...", plan.count.count())?;
    writeln!(output, "Output file: {path}")?;

    let dir = Dir::open_ambient_dir(&plan.output_dir, ambient_authority()).map_err(|source| {
        CliError::OutputDirectory {
            path: plan.output_dir.clone(),
            source,
        }
    })?;

    info!(seed = plan.seed, "random source seeded");
    let mut rng = ChaCha8Rng::seed_from_u64(plan.seed);
    let mut progress = ConsoleProgress::new(&mut *output);
    let report = generate_to_file(
        &dir,
        Utf8Path::new(&file_name),
        plan.request(),
        &mut rng,
        clock,
        &mut progress,
    )?;
    progress.finish()?;

    writeln!(output, "\n✓ Complete! File saved: {path}")?;
    writeln!(output, "File size: ~{} MB", report.megabytes())?;

    Ok(RunOutcome {
        path,
        seed: plan.seed,
        report,
    })
}

fn wait_for_enter<I, O>(input: &mut I, output: &mut O) -> Result<(), CliError>
where
    I: BufRead,
    O: Write,
{
    writeln!(output, "\nPress Enter to exit...")?;
    output.flush()?;
    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    Ok(())
}

fn random_seed() -> u64 {
    rand::rng().random()
}

/// Writes progress lines to the console, keeping the first write error for
/// [`ConsoleProgress::finish`].
struct ConsoleProgress<'a, W: Write> {
    out: &'a mut W,
    error: Option<io::Error>,
}

impl<'a, W: Write> ConsoleProgress<'a, W> {
    const fn new(out: &'a mut W) -> Self {
        Self { out, error: None }
    }

    fn finish(self) -> io::Result<()> {
        self.error.map_or(Ok(()), Err)
    }
}

impl<W: Write> ProgressObserver for ConsoleProgress<'_, W> {
    fn on_progress(&mut self, written: u32, total: u32) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(
            self.out,
            "Progress: {written}/{total} customers generated..."
        ) {
            self.error = Some(err);
        }
    }
}
