//! Streaming document generation.
//!
//! The document is produced record by record: each customer is generated,
//! serialized and handed to the underlying writer before the next one is
//! drawn, so memory use does not grow with the record count.

use std::io::{self, BufWriter, Write};
use std::num::NonZeroU32;

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};
use mockable::Clock;
use rand::Rng;
use tracing::{debug, info};

use crate::document::{ROOT_TAG, write_customer, write_header};
use crate::error::GenerationError;
use crate::generator::generate_customer;
use crate::xml::XmlSink;

/// Records written between two progress notifications unless configured.
pub const DEFAULT_PROGRESS_INTERVAL: NonZeroU32 = match NonZeroU32::new(1000) {
    Some(interval) => interval,
    None => panic!("progress interval must be non-zero"),
};

const BYTES_PER_MEGABYTE: u64 = 1024 * 1024;

/// Receives periodic progress notifications during generation.
///
/// Closures taking `(written, total)` implement this trait.
pub trait ProgressObserver {
    /// Called after every full batch with the number of records written so
    /// far and the requested total.
    fn on_progress(&mut self, written: u32, total: u32);
}

impl<F> ProgressObserver for F
where
    F: FnMut(u32, u32),
{
    fn on_progress(&mut self, written: u32, total: u32) {
        self(written, total);
    }
}

/// What to generate: the record count and the progress batch size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    count: NonZeroU32,
    progress_interval: NonZeroU32,
}

impl GenerationRequest {
    /// Requests `count` records with the default progress interval.
    #[must_use]
    pub const fn new(count: NonZeroU32) -> Self {
        Self {
            count,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Overrides the number of records between progress notifications.
    #[must_use]
    pub const fn with_progress_interval(self, progress_interval: NonZeroU32) -> Self {
        Self {
            count: self.count,
            progress_interval,
        }
    }

    /// Number of customer records to write.
    #[must_use]
    pub const fn count(&self) -> NonZeroU32 {
        self.count
    }

    /// Number of records between progress notifications.
    #[must_use]
    pub const fn progress_interval(&self) -> NonZeroU32 {
        self.progress_interval
    }
}

/// Summary of a completed file generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationReport {
    /// Customer records written.
    pub records: u32,
    /// Size of the finished file in bytes.
    pub bytes: u64,
}

impl GenerationReport {
    /// File size in whole mebibytes, rounded down.
    #[must_use]
    pub const fn megabytes(&self) -> u64 {
        self.bytes.saturating_div(BYTES_PER_MEGABYTE)
    }
}

/// Streams a complete customer document into `out`.
///
/// Writes the declaration, the root element, the header block and
/// `request.count()` customers, then closes the root. The header timestamp
/// is read from `clock` once, before the first record. `progress` is
/// notified after every `request.progress_interval()` records.
///
/// Returns the writer after flushing it.
///
/// # Errors
///
/// Returns the first I/O error raised by `out`; the document is incomplete
/// in that case.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
///
/// use customer_fixtures::{GenerationRequest, write_document};
/// use mockable::DefaultClock;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let count = NonZeroU32::new(2).expect("non-zero");
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let bytes = write_document(
///     Vec::new(),
///     GenerationRequest::new(count),
///     &mut rng,
///     &DefaultClock,
///     &mut |_written: u32, _total: u32| {},
/// )
/// .expect("in-memory write");
///
/// let xml = String::from_utf8(bytes).expect("utf-8");
/// assert_eq!(xml.matches("<customer>").count(), 2);
/// ```
pub fn write_document<W, R, P>(
    out: W,
    request: GenerationRequest,
    rng: &mut R,
    clock: &dyn Clock,
    progress: &mut P,
) -> io::Result<W>
where
    W: Write,
    R: Rng + ?Sized,
    P: ProgressObserver + ?Sized,
{
    let total = request.count().get();
    let interval = request.progress_interval().get();

    let mut xml = XmlSink::new(out);
    xml.declaration()?;
    xml.open(ROOT_TAG)?;
    write_header(&mut xml, clock.local().naive_local())?;

    let mut since_report = 0_u32;
    for index in 0..total {
        let record = generate_customer(index, rng, clock);
        write_customer(&mut xml, &record)?;

        since_report += 1;
        if since_report == interval {
            since_report = 0;
            let written = index + 1;
            debug!(written, total, "customer generation progress");
            progress.on_progress(written, total);
        }
    }

    xml.close(ROOT_TAG)?;
    xml.finish()
}

/// Generates a customer document into `file_name` inside `dir`.
///
/// An existing file is truncated. Output is buffered, flushed and synced
/// before the size is read back for the report.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidFileName`] when `file_name` is not a
/// single path component, [`GenerationError::Open`] when the file cannot be
/// created, and [`GenerationError::Write`] for any failure after that.
pub fn generate_to_file<R, P>(
    dir: &Dir,
    file_name: &Utf8Path,
    request: GenerationRequest,
    rng: &mut R,
    clock: &dyn Clock,
    progress: &mut P,
) -> Result<GenerationReport, GenerationError>
where
    R: Rng + ?Sized,
    P: ProgressObserver + ?Sized,
{
    let mut components = file_name.components();
    let (Some(Utf8Component::Normal(name)), None) = (components.next(), components.next()) else {
        return Err(GenerationError::InvalidFileName {
            path: file_name.to_path_buf(),
        });
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    let file = dir
        .open_with(name, &options)
        .map_err(|source| GenerationError::Open {
            path: file_name.to_path_buf(),
            source,
        })?;

    let write_error = |source: io::Error| GenerationError::Write {
        path: file_name.to_path_buf(),
        source,
    };

    info!(
        count = request.count().get(),
        path = %file_name,
        "customer document generation started"
    );
    let buffered = write_document(BufWriter::new(file), request, rng, clock, progress)
        .map_err(write_error)?;
    let file = buffered
        .into_inner()
        .map_err(|err| write_error(err.into_error()))?;
    file.sync_all().map_err(write_error)?;
    let bytes = file.metadata().map_err(write_error)?.len();

    let report = GenerationReport {
        records: request.count().get(),
        bytes,
    };
    info!(
        records = report.records,
        bytes = report.bytes,
        path = %file_name,
        "customer document written"
    );
    Ok(report)
}
