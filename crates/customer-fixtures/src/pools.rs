//! Fixed value pools for record generation.
//!
//! Every pool is a non-empty, ordered list of literals. Emptiness is checked
//! when the pool constant is evaluated, so a bad pool fails the build rather
//! than a generation run.

use rand::Rng;

/// A non-empty pool of candidate values for uniform random selection.
///
/// # Example
///
/// ```
/// use customer_fixtures::pools::CITIES;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let city = CITIES.pick(&mut rng);
///
/// assert!(CITIES.contains(city));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pool<T: 'static> {
    first: &'static T,
    rest: &'static [T],
}

impl<T: 'static> Pool<T> {
    /// Builds a pool from a static slice.
    ///
    /// # Panics
    ///
    /// Panics when `values` is empty. Pools are declared as statics, so the
    /// panic surfaces as a compile-time evaluation error.
    #[must_use]
    pub const fn new(values: &'static [T]) -> Self {
        match values.split_first() {
            Some((first, rest)) => Self { first, rest },
            None => panic!("value pools must not be empty"),
        }
    }

    /// Draws one value uniformly at random.
    pub fn pick<R>(&self, rng: &mut R) -> &'static T
    where
        R: Rng + ?Sized,
    {
        let slot = rng.random_range(0..=self.rest.len());
        slot.checked_sub(1)
            .and_then(|offset| self.rest.get(offset))
            .unwrap_or(self.first)
    }

    /// Iterates over the pool in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'static T> {
        std::iter::once(self.first).chain(self.rest.iter())
    }
}

impl<T: PartialEq + 'static> Pool<T> {
    /// Returns `true` when `value` is a member of the pool.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|candidate| candidate == value)
    }
}

/// Given names.
pub static FIRST_NAMES: Pool<&str> = Pool::new(&[
    "Erik", "Anna", "Lars", "Maria", "Johan", "Karin", "Anders", "Sofia", "Magnus", "Emma",
    "Oskar", "Lisa", "Gustav", "Sara", "Fredrik", "Helena",
]);

/// Family names.
pub static LAST_NAMES: Pool<&str> = Pool::new(&[
    "Andersson",
    "Johansson",
    "Karlsson",
    "Nilsson",
    "Eriksson",
    "Larsson",
    "Olsson",
    "Persson",
    "Svensson",
    "Gustafsson",
    "Pettersson",
    "Jonsson",
]);

/// Street names.
pub static STREETS: Pool<&str> = Pool::new(&[
    "Strandvägen",
    "Drottninggatan",
    "Kungsgatan",
    "Vasagatan",
    "Sveavägen",
    "Malmvägen",
    "Ringvägen",
    "Birger Jarlsgatan",
    "Storgatan",
    "Parkgatan",
]);

/// Entrance letters appended to the street number. The empty entry means no
/// letter.
pub static STREET_SUFFIXES: Pool<&str> = Pool::new(&["A", "B", "C", ""]);

/// City names, upper case as printed on Swedish postal addresses.
pub static CITIES: Pool<&str> = Pool::new(&[
    "STOCKHOLM",
    "GÖTEBORG",
    "MALMÖ",
    "UPPSALA",
    "VÄSTERÅS",
    "ÖREBRO",
    "LINKÖPING",
    "HELSINGBORG",
    "JÖNKÖPING",
    "NORRKÖPING",
    "VÄXJÖ",
    "LUND",
]);

/// Annual consumption tiers in kWh.
pub static CONSUMPTION_TIERS: Pool<u32> =
    Pool::new(&[2000, 3000, 5000, 7000, 10_000, 15_000, 20_000]);
