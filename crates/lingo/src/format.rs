//! Locale-aware date and number formatting.
//!
//! Pattern rendering is done against the locale metadata tables, not a
//! formatting library, so day and month names follow the locale (including
//! genitive month forms) and separators follow its number conventions.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::locale::{Locale, OrdinalStyle};
use crate::types::Value;

impl Locale {
    /// Format an integer with this locale's group separator.
    ///
    /// ```
    /// use lingo::Locale;
    ///
    /// let en = Locale::resolve(&["en"]);
    /// assert_eq!(en.format_number(1234567), "1,234,567");
    ///
    /// let no = Locale::resolve(&["no"]);
    /// assert_eq!(no.format_number(-1234), "-1 234");
    /// ```
    pub fn format_number(&self, n: i64) -> String {
        let data = self.data();
        let digits = n.unsigned_abs().to_string();
        let grouped = group_digits(&digits, data.number_group);
        if n < 0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    /// Format a float with a fixed number of decimal places, using this
    /// locale's decimal and group separators.
    pub fn format_float(&self, x: f64, precision: usize) -> String {
        let data = self.data();
        let rendered = format!("{x:.precision$}");
        let (int_part, frac_part) = match rendered.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (rendered.as_str(), None),
        };
        let (sign, digits) = match int_part.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", int_part),
        };
        let mut out = format!("{sign}{}", group_digits(digits, data.number_group));
        if let Some(frac) = frac_part {
            out.push_str(data.number_decimal);
            out.push_str(frac);
        }
        out
    }

    /// Render a date/time through a pattern against this locale's tables.
    ///
    /// Supported directives: `%Y %y %m %-m %B %b %^B %d %-d %e %A %a
    /// %H %k %M %S %%`. Unknown directives are left verbatim.
    pub fn strftime(&self, dt: &NaiveDateTime, pattern: &str) -> String {
        let data = self.data();
        let month = dt.month() as usize - 1;
        let wday = dt.weekday().num_days_from_sunday() as usize;
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut chars = pattern.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('Y') => out.push_str(&dt.year().to_string()),
                Some('y') => out.push_str(&format!("{:02}", dt.year().rem_euclid(100))),
                Some('m') => out.push_str(&format!("{:02}", dt.month())),
                Some('B') => out.push_str(data.month_names[month]),
                Some('b') => out.push_str(data.month_abbrs[month]),
                Some('d') => out.push_str(&format!("{:02}", dt.day())),
                Some('e') => out.push_str(&format!("{:>2}", dt.day())),
                Some('A') => out.push_str(data.wday_names[wday]),
                Some('a') => out.push_str(data.wday_abbrs[wday]),
                Some('H') => out.push_str(&format!("{:02}", dt.hour())),
                Some('k') => out.push_str(&format!("{:>2}", dt.hour())),
                Some('M') => out.push_str(&format!("{:02}", dt.minute())),
                Some('S') => out.push_str(&format!("{:02}", dt.second())),
                Some('%') => out.push('%'),
                Some('-') => match chars.next() {
                    Some('m') => out.push_str(&dt.month().to_string()),
                    Some('d') => out.push_str(&dt.day().to_string()),
                    other => {
                        out.push_str("%-");
                        if let Some(o) = other {
                            out.push(o);
                        }
                    }
                },
                Some('^') => match chars.next() {
                    Some('B') => out.push_str(data.month_standalone[month]),
                    other => {
                        out.push_str("%^");
                        if let Some(o) = other {
                            out.push(o);
                        }
                    }
                },
                Some(other) => {
                    out.push('%');
                    out.push(other);
                }
                None => out.push('%'),
            }
        }
        out
    }

    /// Format a date with this locale's configured date pattern.
    pub fn format_date(&self, date: NaiveDate) -> String {
        self.strftime(&at_midnight(date), self.data().date_format)
    }

    /// Format a time of day with this locale's configured time pattern.
    pub fn format_time(&self, dt: &NaiveDateTime) -> String {
        self.strftime(dt, self.data().time_format)
    }

    /// Format a date and time, date first.
    pub fn format_datetime(&self, dt: &NaiveDateTime) -> String {
        let data = self.data();
        format!(
            "{} {}",
            self.strftime(dt, data.date_format),
            self.strftime(dt, data.time_format)
        )
    }

    /// Write an ordinal day number in this locale's style.
    ///
    /// ```
    /// use lingo::Locale;
    ///
    /// assert_eq!(Locale::resolve(&["en"]).ordinalize(22), "22nd");
    /// assert_eq!(Locale::resolve(&["no"]).ordinalize(1), "1.");
    /// assert_eq!(Locale::resolve(&["fr"]).ordinalize(1), "1er");
    /// ```
    pub fn ordinalize(&self, n: u32) -> String {
        match self.data().ordinal {
            OrdinalStyle::Suffix => {
                let suffix = if (11..=13).contains(&(n % 100)) {
                    "th"
                } else {
                    match n % 10 {
                        1 => "st",
                        2 => "nd",
                        3 => "rd",
                        _ => "th",
                    }
                };
                format!("{n}{suffix}")
            }
            OrdinalStyle::Dot => format!("{n}."),
            OrdinalStyle::FirstEr => {
                if n == 1 {
                    "1er".to_string()
                } else {
                    n.to_string()
                }
            }
            OrdinalStyle::Plain => n.to_string(),
        }
    }

    /// Format a full date: ordinal day and month name, optionally wrapped in
    /// the locale's year pattern.
    ///
    /// The full-date pattern's `%e` slot is replaced by the ordinalized day;
    /// with `with_year`, the year pattern's `_` slot wraps the result.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use lingo::Locale;
    ///
    /// let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    /// let no = Locale::resolve(&["no"]);
    /// assert_eq!(no.format_date_full(date, true), "1. av januar, 2020");
    /// assert_eq!(no.format_date_full(date, false), "1. av januar");
    /// ```
    pub fn format_date_full(&self, date: NaiveDate, with_year: bool) -> String {
        let data = self.data();
        let mut pattern = data.full_format.to_string();
        if with_year {
            pattern = data.year_format.replacen('_', &pattern, 1);
        }
        let pattern = pattern.replace("%e", &self.ordinalize(date.day()));
        self.strftime(&at_midnight(date), &pattern)
    }
}

impl Value {
    /// Render this value the way the given locale writes it: numbers with
    /// its separators, dates through its date pattern. Strings pass through
    /// unchanged.
    pub fn localize(&self, locale: &Locale) -> String {
        match self {
            Value::Number(n) => locale.format_number(*n),
            Value::Float(x) => localize_float(*x, locale),
            Value::String(s) => s.clone(),
            Value::Date(d) => locale.format_date(*d),
            Value::DateTime(dt) => locale.format_datetime(dt),
        }
    }
}

/// Float rendering for interpolation keeps the value's natural precision.
fn localize_float(x: f64, locale: &Locale) -> String {
    let rendered = x.to_string();
    let precision = rendered
        .split_once('.')
        .map(|(_, frac)| frac.len())
        .unwrap_or(0);
    locale.format_float(x, precision)
}

/// Insert the group separator every three digits, counting from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() * 2);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(*b as char);
    }
    out
}

fn at_midnight(date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(date, NaiveTime::MIN)
}
