//! Presentation helpers for server-provided content. CMS bodies are rendered
//! as escaped text paragraphs, never as raw HTML.

/// Splits a body into paragraphs on blank lines; single newlines are kept inside a paragraph.
#[must_use]
pub fn paragraphs(body: &str) -> Vec<String> {
    let normalized = body.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(|block| {
            block
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

/// Shortens text to at most `max_chars` characters at a word boundary, adding an ellipsis.
#[must_use]
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max_chars {
        return text;
    }

    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(' ') {
        Some(index) if index > 0 => &cut[..index],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end_matches(['.', ',', ';', ':']))
}

/// Formats an amount with two decimals, thousands separators and the currency code.
#[must_use]
pub fn format_money(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round();
    let whole = (cents / 100.0).trunc();
    let fraction = cents - whole * 100.0;

    let digits = format!("{whole:.0}");
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction:02.0} {currency}")
}

/// Keeps the `YYYY-MM-DD` part of an RFC 3339 timestamp; other values pass through.
#[must_use]
pub fn format_date(timestamp: &str) -> String {
    let trimmed = timestamp.trim();
    match trimmed.get(..10) {
        Some(date) if date.as_bytes().get(4) == Some(&b'-') && date.as_bytes().get(7) == Some(&b'-') => {
            date.to_string()
        }
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let body = "First line\nstill first\n\n\r\nSecond\r\n\r\n  \n\nThird  ";
        assert_eq!(
            paragraphs(body),
            vec![
                "First line still first".to_string(),
                "Second".to_string(),
                "Third".to_string()
            ]
        );
        assert!(paragraphs("  \n\n ").is_empty());
    }

    #[test]
    fn excerpt_cuts_at_word_boundary() {
        assert_eq!(excerpt("Short text", 50), "Short text");
        assert_eq!(
            excerpt("We help growing firms win more clients.", 20),
            "We help growing…"
        );
        assert_eq!(excerpt("Supercalifragilistic", 5), "Super…");
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(1234567.891, "USD"), "1,234,567.89 USD");
        assert_eq!(format_money(0.5, "EUR"), "0.50 EUR");
        assert_eq!(format_money(-42.0, "USD"), "-42.00 USD");
        assert_eq!(format_money(999.999, "USD"), "1,000.00 USD");
    }

    #[test]
    fn date_formatting() {
        assert_eq!(format_date("2026-10-16T08:30:00Z"), "2026-10-16");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
