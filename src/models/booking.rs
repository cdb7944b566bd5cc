use serde::{Deserialize, Serialize};

/// A single table reservation.
///
/// All fields besides `id` are caller-supplied and stored verbatim; `date`
/// and `time` carry no format validation but together identify the slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub date: String,
    pub time: String,
    pub guests: Guests,
    pub name: String,
    pub contact: String,
}

impl Booking {
    /// Whether this booking occupies the given `(date, time)` slot.
    pub fn occupies(&self, date: &str, time: &str) -> bool {
        self.date == date && self.time == time
    }
}

/// Party size as supplied by the caller.
///
/// Callers send either a JSON number or a JSON string; whichever form was
/// submitted is preserved on output. No range validation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Guests {
    Count(serde_json::Number),
    Text(String),
}

impl Guests {
    /// True for values that fail the presence check: the empty string and
    /// numeric zero.
    pub fn is_blank(&self) -> bool {
        match self {
            Guests::Count(n) => n.as_f64() == Some(0.0),
            Guests::Text(s) => s.is_empty(),
        }
    }
}
