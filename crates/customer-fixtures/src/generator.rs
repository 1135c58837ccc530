//! Per-record randomization.
//!
//! Produces one [`CustomerRecord`] from a zero-based index, a caller-owned
//! random source and a clock. Identity values depend only on the index; all
//! other values are fresh draws, so seeding the random source and fixing the
//! clock makes the output reproducible.

use chrono::TimeDelta;
use mockable::Clock;
use rand::Rng;

use crate::pools::{CITIES, CONSUMPTION_TIERS, FIRST_NAMES, LAST_NAMES, STREET_SUFFIXES, STREETS};
use crate::record::{
    Address, Billing, CustomerRecord, Identity, PhoneNumber, PhoneNumbers, SocialId, ZipCode,
};

/// Customer number assigned to index zero.
pub const BASE_CUSTOMER_ID: u64 = 6;

/// Site number assigned to index zero.
pub const BASE_SITE_ID: u64 = 9;

/// Metering object number assigned to index zero.
pub const BASE_OBJECT_ID: i64 = 735_999_756_427_205_424;

/// Domain of every generated e-mail address.
pub const EMAIL_DOMAIN: &str = "zavann.net";

/// Youngest customer age in days (about 20 years).
const MIN_AGE_DAYS: i64 = 7300;

/// Exclusive upper bound on customer age in days (about 70 years).
const MAX_AGE_DAYS: i64 = 25_550;

/// Meter reading multiplier, upper bound exclusive.
const MIN_READING_MULTIPLIER: u32 = 2;
const MAX_READING_MULTIPLIER: u32 = 6;

/// Returns the identity values for `index`.
///
/// # Example
///
/// ```
/// use customer_fixtures::identity_for_index;
///
/// let identity = identity_for_index(0);
/// assert_eq!(identity.customer_id, 6);
/// assert_eq!(identity.site_id, 9);
/// assert_eq!(identity.object_id, 735_999_756_427_205_424);
/// ```
#[must_use]
pub fn identity_for_index(index: u32) -> Identity {
    Identity {
        customer_id: BASE_CUSTOMER_ID + u64::from(index),
        site_id: BASE_SITE_ID + u64::from(index),
        object_id: BASE_OBJECT_ID + i64::from(index),
    }
}

/// Returns the contact e-mail for a name pair at `index`.
///
/// Embedding the index keeps addresses unique when names repeat.
#[must_use]
pub fn email_for(first_name: &str, last_name: &str, index: u32) -> String {
    format!(
        "{}.{}{index}@{EMAIL_DOMAIN}",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    )
}

/// Generates the customer at `index`.
///
/// Values are drawn in a fixed order (names, address, birth date, phones,
/// billing) so a seeded random source always yields the same record. The
/// clock is read once; the birth date and every timestamp field derive from
/// that reading.
///
/// # Example
///
/// ```
/// use customer_fixtures::generate_customer;
/// use mockable::DefaultClock;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let record = generate_customer(3, &mut rng, &DefaultClock);
///
/// assert_eq!(record.identity.customer_id, 9);
/// assert!(record.email.ends_with("3@zavann.net"));
/// ```
pub fn generate_customer<R>(index: u32, rng: &mut R, clock: &dyn Clock) -> CustomerRecord
where
    R: Rng + ?Sized,
{
    let now = clock.local();
    let first_name = *FIRST_NAMES.pick(rng);
    let last_name = *LAST_NAMES.pick(rng);

    let address = draw_address(rng);

    let age_days = rng.random_range(MIN_AGE_DAYS..MAX_AGE_DAYS);
    let birth_date = now.date_naive() - TimeDelta::days(age_days);
    let social_id = SocialId {
        birth_date,
        serial: rng.random_range(1000..=9999),
    };

    let identity = identity_for_index(index);

    let phones = PhoneNumbers {
        day: draw_phone(rng),
        home: draw_phone(rng),
        cell: draw_phone(rng),
    };
    let email = email_for(first_name, last_name, index);

    let consumption = *CONSUMPTION_TIERS.pick(rng);
    let multiplier = rng.random_range(MIN_READING_MULTIPLIER..MAX_READING_MULTIPLIER);
    let billing = Billing {
        consumption,
        latest_reading: consumption * multiplier,
    };

    CustomerRecord {
        index,
        identity,
        first_name,
        last_name,
        address,
        social_id,
        phones,
        email,
        billing,
        created_at: now.naive_local(),
    }
}

fn draw_address<R>(rng: &mut R) -> Address
where
    R: Rng + ?Sized,
{
    let street_name = *STREETS.pick(rng);
    let street_number = rng.random_range(1..=200);
    let suffix = *STREET_SUFFIXES.pick(rng);
    let city = *CITIES.pick(rng);
    let zip_code = ZipCode {
        area: rng.random_range(100..=999),
        district: rng.random_range(10..=99),
    };

    Address {
        street_name,
        street_number,
        suffix,
        zip_code,
        city,
    }
}

fn draw_phone<R>(rng: &mut R) -> PhoneNumber
where
    R: Rng + ?Sized,
{
    PhoneNumber {
        area_code: rng.random_range(10..=99),
        subscriber: rng.random_range(10_000_000..=99_999_999),
    }
}
