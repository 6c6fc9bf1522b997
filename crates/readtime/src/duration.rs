use std::fmt;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

const UNITS: [(&str, u64); 5] = [
    ("week", WEEK),
    ("day", DAY),
    ("hour", HOUR),
    ("minute", MINUTE),
    ("second", 1),
];

pub const DEFAULT_INTERVAL_FORMAT: &str = "%h hours, %i minutes, %s seconds";

/// Estimated read time. Every view is derived from the two stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DurationResult {
    seconds: u64,
    show_seconds: bool,
}

impl DurationResult {
    pub fn new(seconds: u64, show_seconds: bool) -> Self {
        Self {
            seconds,
            show_seconds,
        }
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn show_seconds(&self) -> bool {
        self.show_seconds
    }

    pub fn minutes(&self) -> u64 {
        self.seconds / MINUTE
    }

    pub fn hours(&self) -> u64 {
        self.seconds / HOUR
    }

    /// Renders e.g. `1 hour, 2 minutes, 5 seconds`.
    ///
    /// Without seconds the total is rounded to the nearest minute first, half
    /// a minute rounding up, so 3599 seconds reads as `1 hour`.
    pub fn human(&self) -> String {
        let mut remaining = if self.show_seconds {
            self.seconds
        } else {
            self.seconds.saturating_add(MINUTE / 2) / MINUTE * MINUTE
        };

        let mut parts = Vec::new();
        for (unit, size) in UNITS {
            if size < MINUTE && !self.show_seconds {
                break;
            }

            let count = remaining / size;
            remaining %= size;
            if count > 0 {
                parts.push(pluralize(count, unit));
            }
        }

        if parts.is_empty() {
            let unit = if self.show_seconds { "second" } else { "minute" };
            return pluralize(0, unit);
        }

        parts.join(", ")
    }

    /// Substitutes the day/hour/minute/second breakdown into a `%` template:
    ///
    /// | token | value |
    /// |---|---|
    /// | `%a` `%d` `%D` | days |
    /// | `%h` `%H` | hours within the day |
    /// | `%i` `%I` | minutes within the hour |
    /// | `%s` `%S` | seconds within the minute |
    /// | `%y` `%Y` `%m` `%M` | always zero |
    /// | `%f` `%F` | always zero |
    /// | `%R` `%r` | `+` and nothing |
    /// | `%%` | `%` |
    ///
    /// Upper-case tokens are zero padded. Anything else is copied as is.
    pub fn interval(&self, format: &str) -> String {
        let days = self.seconds / DAY;
        let hours = self.seconds % DAY / HOUR;
        let minutes = self.seconds % HOUR / MINUTE;
        let seconds = self.seconds % MINUTE;

        let mut output = String::with_capacity(format.len());
        let mut chars = format.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                output.push(c);
                continue;
            }

            let token = chars.next();
            match token {
                Some('a') | Some('d') => output.push_str(&days.to_string()),
                Some('D') => output.push_str(&format!("{days:02}")),
                Some('h') => output.push_str(&hours.to_string()),
                Some('H') => output.push_str(&format!("{hours:02}")),
                Some('i') => output.push_str(&minutes.to_string()),
                Some('I') => output.push_str(&format!("{minutes:02}")),
                Some('s') => output.push_str(&seconds.to_string()),
                Some('S') => output.push_str(&format!("{seconds:02}")),
                Some('y') | Some('m') | Some('f') => output.push('0'),
                Some('Y') | Some('M') => output.push_str("00"),
                Some('F') => output.push_str("000000"),
                Some('R') => output.push('+'),
                Some('r') => (),
                Some('%') => output.push('%'),
                Some(other) => {
                    output.push('%');
                    output.push(other);
                }
                None => output.push('%'),
            }
        }

        output
    }
}

impl fmt::Display for DurationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.human())
    }
}

fn pluralize(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit}")
    } else {
        format!("{count} {unit}s")
    }
}
