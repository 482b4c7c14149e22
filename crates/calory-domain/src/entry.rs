//! Food entries - the single persisted record type

use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier of a food entry
///
/// Ids are millisecond Unix timestamps taken at creation time, which keeps the
/// stored format a plain integer. Uniqueness inside a collection is enforced by
/// [`FoodLog::next_id`](crate::FoodLog::next_id), not by the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u64);

impl EntryId {
    /// Create an EntryId from a raw value
    ///
    /// # Examples
    ///
    /// ```
    /// use calory_domain::EntryId;
    ///
    /// let id = EntryId::from_value(1_700_000_000_000);
    /// assert_eq!(id.value(), 1_700_000_000_000);
    /// ```
    pub fn from_value(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Current wall-clock time in milliseconds since the Unix epoch
    ///
    /// A clock set before 1970 yields 0; id allocation still stays monotonic.
    pub fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|e| format!("Invalid entry id '{}': {}", s, e))
    }
}

/// One food and its calorie count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodEntry {
    /// Unique identifier, creation ordered
    pub id: EntryId,

    /// Food name as resolved by the lookup service
    pub name: String,

    /// Calories, rounded to the nearest integer
    pub calories: u32,
}

impl FoodEntry {
    /// Create a new entry
    pub fn new(id: EntryId, name: impl Into<String>, calories: u32) -> Self {
        Self {
            id,
            name: name.into(),
            calories,
        }
    }
}

/// Round a calorie value reported by the lookup service
///
/// Halves round up, matching how the service's figures have always been
/// displayed. Negative and non-finite values become 0; oversized values
/// saturate.
///
/// # Examples
///
/// ```
/// use calory_domain::round_calories;
///
/// assert_eq!(round_calories(94.6), 95);
/// assert_eq!(round_calories(52.5), 53);
/// assert_eq!(round_calories(-3.0), 0);
/// ```
pub fn round_calories(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // Positive here, so round-half-away-from-zero is round-half-up
    let rounded = value.round();
    if rounded >= u32::MAX as f64 {
        u32::MAX
    } else {
        rounded as u32
    }
}
