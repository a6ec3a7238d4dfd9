//! Shared rendering utilities.
//!
//! - **HTML escaping** for serialised text and attribute values
//! - **Quantity formatting**: scaled ingredient amounts rendered as mixed fractions
//!   ("1 1/2") the way a cookbook prints them

/// Denominators tried, in order, when formatting a quantity as a fraction.
const DENOMINATORS: &[u32] = &[2, 3, 4, 8];

/// Largest difference accepted between a quantity and its fraction form.
const FRACTION_TOLERANCE: f64 = 0.01;

/// Escapes `&`, `<`, `>`, `"` and `'` for HTML text and attribute values.
///
/// # Example
///
/// ```rust
/// use forkify::ui::helpers::escape_html;
///
/// assert_eq!(escape_html("Mac & <Cheese>"), "Mac &amp; &lt;Cheese&gt;");
/// ```
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Formats an ingredient quantity for display.
///
/// `None` renders as an empty string. Whole numbers render without decimals,
/// common kitchen fractions render as (mixed) fractions, anything else is
/// rounded to two decimals with trailing zeros trimmed.
///
/// # Example
///
/// ```rust
/// use forkify::ui::helpers::format_quantity;
///
/// assert_eq!(format_quantity(Some(4.0)), "4");
/// assert_eq!(format_quantity(Some(1.5)), "1 1/2");
/// assert_eq!(format_quantity(Some(0.25)), "1/4");
/// assert_eq!(format_quantity(Some(0.15)), "0.15");
/// assert_eq!(format_quantity(None), "");
/// ```
#[must_use]
pub fn format_quantity(quantity: Option<f64>) -> String {
    let Some(value) = quantity.filter(|q| q.is_finite()) else {
        return String::new();
    };

    let whole = value.trunc();
    let fraction = value - whole;

    if fraction.abs() < FRACTION_TOLERANCE {
        return format!("{whole:.0}");
    }
    if 1.0 - fraction.abs() < FRACTION_TOLERANCE {
        return format!("{:.0}", whole + fraction.signum());
    }

    for &denominator in DENOMINATORS {
        let scaled = fraction * f64::from(denominator);
        let numerator = scaled.round();
        if (scaled - numerator).abs() / f64::from(denominator) < FRACTION_TOLERANCE / 2.0 && numerator >= 1.0 {
            return if whole == 0.0 {
                format!("{numerator:.0}/{denominator}")
            } else {
                format!("{whole:.0} {numerator:.0}/{denominator}")
            };
        }
    }

    let rounded = format!("{value:.2}");
    rounded.trim_end_matches('0').trim_end_matches('.').to_string()
}
