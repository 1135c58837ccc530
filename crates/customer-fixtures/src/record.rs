//! Generated customer record types.
//!
//! A record lives only long enough to be serialized. The types here carry the
//! per-record values; constant organization and contract metadata belongs to
//! the document templates.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// Masking token used in place of the serial part of a reduced social id.
pub const SOCIAL_ID_MASK: &str = "XXXX";

/// Format used for every per-record timestamp field.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Identity values assigned from the record index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    /// Customer number.
    pub customer_id: u64,
    /// Site number, also used as the contract number.
    pub site_id: u64,
    /// Metering object number.
    pub object_id: i64,
}

impl Identity {
    /// Contract number; always equal to the site number.
    #[must_use]
    pub const fn contract_id(&self) -> u64 {
        self.site_id
    }
}

/// Postal code rendered as two digit groups, e.g. `411 38`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZipCode {
    /// Leading three-digit group.
    pub area: u16,
    /// Trailing two-digit group.
    pub district: u8,
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.area, self.district)
    }
}

/// Street address and city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    /// Street name from the street pool.
    pub street_name: &'static str,
    /// House number in `1..=200`.
    pub street_number: u8,
    /// Entrance letter, possibly empty.
    pub suffix: &'static str,
    /// Postal code.
    pub zip_code: ZipCode,
    /// City from the city pool.
    pub city: &'static str,
}

impl Address {
    /// Street line as printed on the customer, e.g. `Kungsgatan 12B`.
    #[must_use]
    pub fn street_line(&self) -> String {
        format!("{} {}{}", self.street_name, self.street_number, self.suffix)
    }
}

/// Synthetic personal identity number derived from a birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialId {
    /// Birth date encoded in the date prefix.
    pub birth_date: NaiveDate,
    /// Four-digit serial in `1000..=9999`.
    pub serial: u16,
}

impl SocialId {
    /// Six-digit `YYMMDD` date prefix.
    #[must_use]
    pub fn date_prefix(&self) -> String {
        self.birth_date.format("%y%m%d").to_string()
    }

    /// Full form, `YYMMDD-NNNN`.
    #[must_use]
    pub fn full(&self) -> String {
        format!("{}-{}", self.date_prefix(), self.serial)
    }

    /// Reduced form with the serial masked, `YYMMDD-XXXX`.
    #[must_use]
    pub fn reduced(&self) -> String {
        format!("{}-{SOCIAL_ID_MASK}", self.date_prefix())
    }
}

/// Swedish-style phone number: a zero, a two-digit area code and an
/// eight-digit subscriber number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneNumber {
    /// Area code in `10..=99`.
    pub area_code: u8,
    /// Subscriber number in `10_000_000..=99_999_999`.
    pub subscriber: u32,
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0{}{}", self.area_code, self.subscriber)
    }
}

/// The three contact numbers of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneNumbers {
    /// Daytime number.
    pub day: PhoneNumber,
    /// Home number.
    pub home: PhoneNumber,
    /// Mobile number.
    pub cell: PhoneNumber,
}

impl PhoneNumbers {
    /// Comma-separated list in day, home, cell order.
    #[must_use]
    pub fn joined(&self) -> String {
        format!("{}, {}, {}", self.day, self.home, self.cell)
    }
}

/// Consumption tier and the meter reading derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Billing {
    /// Annual consumption in kWh.
    pub consumption: u32,
    /// Latest meter reading, a whole multiple of `consumption`.
    pub latest_reading: u32,
}

/// One synthetic customer with its site and contract values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerRecord {
    /// Zero-based position in the document.
    pub index: u32,
    /// Index-derived identity values.
    pub identity: Identity,
    /// Given name.
    pub first_name: &'static str,
    /// Family name.
    pub last_name: &'static str,
    /// Postal address.
    pub address: Address,
    /// Personal identity number.
    pub social_id: SocialId,
    /// Contact numbers.
    pub phones: PhoneNumbers,
    /// Contact e-mail, unique per index.
    pub email: String,
    /// Consumption and meter reading.
    pub billing: Billing,
    /// Creation instant shared by every timestamp field of the record.
    pub created_at: NaiveDateTime,
}

impl CustomerRecord {
    /// Creation timestamp with millisecond precision.
    #[must_use]
    pub fn created_at_text(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}
