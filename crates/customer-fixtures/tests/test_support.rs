//! Shared helpers for customer-fixtures integration tests.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::num::NonZeroU32;
use std::sync::atomic::{AtomicUsize, Ordering};

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use chrono::{DateTime, Local, TimeZone, Utc};
use customer_fixtures::{GenerationRequest, write_document};
use mockable::Clock;
use quick_xml::Reader;
use quick_xml::events::Event;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Clock frozen at a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Clock frozen at 2025-11-06 06:57:00 UTC.
    pub fn generation_day() -> Self {
        Self(
            Utc.with_ymd_and_hms(2025, 11, 6, 6, 57, 0)
                .single()
                .unwrap_or_else(|| panic!("fixed instant is unambiguous")),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Renders a document of `count` customers in memory.
///
/// # Panics
///
/// Panics if `count` is zero or the output is not UTF-8.
pub fn render_document(count: u32, seed: u64) -> String {
    let count = NonZeroU32::new(count).unwrap_or_else(|| panic!("count must be non-zero"));
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let bytes = write_document(
        Vec::new(),
        GenerationRequest::new(count),
        &mut rng,
        &FixedClock::generation_day(),
        &mut |_: u32, _: u32| {},
    )
    .unwrap_or_else(|err| panic!("in-memory write failed: {err}"));
    String::from_utf8(bytes).unwrap_or_else(|err| panic!("document is not UTF-8: {err}"))
}

/// Leaf values of one customer keyed by `parent/tag`, e.g. `site/site_id`.
pub type CustomerFields = BTreeMap<String, String>;

/// Structure of a parsed document.
#[derive(Debug, Default)]
pub struct ParsedDocument {
    /// Whether an XML declaration was present.
    pub has_declaration: bool,
    /// Names of top-level elements.
    pub roots: Vec<String>,
    /// Number of `site` elements directly inside each customer.
    pub sites_per_customer: Vec<usize>,
    /// Number of `contract` elements directly inside each site.
    pub contracts_per_site: Vec<usize>,
    /// Leaf values per customer, in document order.
    pub customers: Vec<CustomerFields>,
}

impl ParsedDocument {
    /// Returns the value at `key` for customer `index`.
    ///
    /// # Panics
    ///
    /// Panics when the customer or the key is missing.
    pub fn field(&self, index: usize, key: &str) -> &str {
        self.customers
            .get(index)
            .and_then(|fields| fields.get(key))
            .map(String::as_str)
            .unwrap_or_else(|| panic!("customer {index} has no {key}"))
    }
}

struct Frame {
    name: String,
    text: String,
    children: Vec<String>,
}

/// Parses `xml`, panicking on any well-formedness error.
///
/// # Panics
///
/// Panics when the document is malformed.
pub fn parse_document(xml: &str) -> ParsedDocument {
    let mut reader = Reader::from_str(xml);
    let mut parsed = ParsedDocument::default();
    let mut stack: Vec<Frame> = Vec::new();
    let mut current = CustomerFields::new();

    loop {
        let event = reader
            .read_event()
            .unwrap_or_else(|err| panic!("malformed XML: {err}"));
        match event {
            Event::Decl(_) => parsed.has_declaration = true,
            Event::Start(start) => {
                let name = tag_name(start.name().as_ref());
                match stack.last_mut() {
                    Some(parent) => parent.children.push(name.clone()),
                    None => parsed.roots.push(name.clone()),
                }
                stack.push(Frame {
                    name,
                    text: String::new(),
                    children: Vec::new(),
                });
            }
            Event::Empty(empty) => {
                let name = tag_name(empty.name().as_ref());
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(name.clone());
                    current.insert(format!("{}/{name}", parent.name), String::new());
                }
            }
            Event::Text(text) => {
                if let Some(top) = stack.last_mut() {
                    let chunk = std::str::from_utf8(&text)
                        .unwrap_or_else(|err| panic!("text is not UTF-8: {err}"));
                    top.text.push_str(chunk);
                }
            }
            Event::End(_) => {
                let frame = stack
                    .pop()
                    .unwrap_or_else(|| panic!("end tag without start"));
                close_frame(&mut parsed, &mut current, &stack, frame);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    assert!(stack.is_empty(), "unclosed elements remain");
    parsed
}

fn close_frame(
    parsed: &mut ParsedDocument,
    current: &mut CustomerFields,
    stack: &[Frame],
    frame: Frame,
) {
    let count_of = |tag: &str| frame.children.iter().filter(|child| *child == tag).count();
    match frame.name.as_str() {
        "customer" => {
            parsed.sites_per_customer.push(count_of("site"));
            parsed.customers.push(std::mem::take(current));
        }
        "site" => parsed.contracts_per_site.push(count_of("contract")),
        _ if frame.children.is_empty() => {
            if let Some(parent) = stack.last() {
                current.insert(format!("{}/{}", parent.name, frame.name), frame.text);
            }
        }
        _ => {}
    }
}

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8(raw.to_vec()).unwrap_or_else(|err| panic!("tag is not UTF-8: {err}"))
}

/// Write sink that keeps only the number of `<customer>` tags seen.
#[derive(Debug, Default)]
pub struct CustomerCounter {
    matched: usize,
    /// Opening `customer` tags written so far.
    pub customers: usize,
}

const CUSTOMER_OPEN_TAG: &[u8] = b"<customer>";

impl Write for CustomerCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            if CUSTOMER_OPEN_TAG.get(self.matched) == Some(&byte) {
                self.matched += 1;
                if self.matched == CUSTOMER_OPEN_TAG.len() {
                    self.customers += 1;
                    self.matched = 0;
                }
            } else {
                self.matched = usize::from(byte == b'<');
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Create a unique scratch directory under `target/customer-fixtures-tests`.
///
/// # Errors
///
/// Returns any filesystem errors encountered while creating the directory.
pub fn unique_output_dir(prefix: &str) -> io::Result<(Utf8PathBuf, Dir)> {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let path = Utf8PathBuf::from("target")
        .join("customer-fixtures-tests")
        .join(format!("{prefix}-{process_id}-{counter}"));
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    root.create_dir_all(&path)?;
    let dir = root.open_dir(&path)?;
    Ok((path, dir))
}
