//! Locale-dependent formatting of dates and numbers

use chrono::NaiveDate;

/// Formatting conventions of a locale tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleFormat {
    date_pattern: &'static str,
    decimal_separator: char,
    group_separator: char,
}

impl LocaleFormat {
    /// Conventions for a locale tag; unknown tags use en-US conventions
    pub fn for_locale(locale: &str) -> Self {
        match locale.to_ascii_lowercase().replace('_', "-").as_str() {
            "da-dk" | "da" => Self {
                date_pattern: "%d.%m.%Y",
                decimal_separator: ',',
                group_separator: '.',
            },
            _ => Self {
                date_pattern: "%m/%d/%Y",
                decimal_separator: '.',
                group_separator: ',',
            },
        }
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.date_pattern).to_string()
    }

    /// Format a number with grouped thousands and a fixed number of decimals
    pub fn format_number(&self, value: f64, decimals: usize) -> String {
        let formatted = format!("{:.*}", decimals, value.abs());
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3);
        for (i, digit) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }

        let mut out = String::new();
        if value.is_sign_negative() && formatted.chars().any(|c| c != '0' && c != '.') {
            out.push('-');
        }
        out.push_str(&grouped);
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        assert_eq!(LocaleFormat::for_locale("da-DK").format_date(date), "07.03.2024");
        assert_eq!(LocaleFormat::for_locale("en-US").format_date(date), "03/07/2024");
        assert_eq!(LocaleFormat::for_locale("xx-YY").format_date(date), "03/07/2024");
    }

    #[test]
    fn test_numbers() {
        let da = LocaleFormat::for_locale("da-DK");
        let en = LocaleFormat::for_locale("en-US");

        assert_eq!(da.format_number(1234567.891, 2), "1.234.567,89");
        assert_eq!(en.format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(en.format_number(999.0, 0), "999");
        assert_eq!(en.format_number(-1000.5, 1), "-1,000.5");
        assert_eq!(en.format_number(-0.0001, 2), "0.00");
    }
}
