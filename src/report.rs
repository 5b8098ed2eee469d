//! Fixed report and selective rendering.

use hifitime::Epoch;

use std::io::Write;

use crate::errors::FormattingError;
use crate::fmt::print_time;
use crate::gps;

const LABEL_WIDTH: usize = 32;

/// Eight spaces of left margin, as in the original report.
const MARGIN: &str = "        ";

/// Fixed report lines: label and rendering directive.
/// The week of year line is computed, not directive driven.
const REPORT_LINES: [(&str, &str); 6] = [
    ("Month/Day/Year H:M:S", "%02m/%02d/%04Y %02H:%02M:%02S %P"),
    ("GPSweek DayOfWeek SecOfWeek", "%4F %w % 13.6g"),
    ("FullGPSweek Zcount", "%4F % 6z"),
    ("Year DayOfYear SecondOfDay", "%04Y %03j % 12.6s"),
    ("Unix: Second Microsecond", "%U % 6u"),
    ("Zcount: 29-bit (32-bit)", "%c (%C)"),
];

/// Decides and executes exactly one rendering mode.
///
/// Without the week of year flag and without a custom pattern, the
/// fixed eight-field report is emitted. Otherwise the week of year
/// line is printed when requested, then the custom pattern rendering
/// when supplied; both may fire in one call, in that order.
pub fn render<W: Write>(
    w: &mut W,
    t: Epoch,
    week_of_year: bool,
    custom: Option<&str>,
) -> Result<(), FormattingError> {
    if !week_of_year && custom.is_none() {
        return render_report(w, t);
    }

    if week_of_year {
        writeln!(w, "{}", gps::week_of_year(t))?;
    }

    if let Some(pattern) = custom {
        writeln!(w, "{}", print_time(t, pattern))?;
    }

    Ok(())
}

/// Emits the fixed report: a blank line, eight labeled fields, then
/// two blank lines.
pub fn render_report<W: Write>(w: &mut W, t: Epoch) -> Result<(), FormattingError> {
    writeln!(w)?;

    labeled(w, REPORT_LINES[0].0, &print_time(t, REPORT_LINES[0].1))?;
    labeled(w, "Week of year", &gps::week_of_year(t).to_string())?;
    labeled(
        w,
        "Modified Julian Date",
        &significant_digits(gps::to_mjd(t), 15),
    )?;
    for (label, directive) in REPORT_LINES[1..].iter() {
        labeled(w, label, &print_time(t, directive))?;
    }

    writeln!(w)?;
    writeln!(w)?;
    Ok(())
}

fn labeled<W: Write>(w: &mut W, label: &str, value: &str) -> Result<(), FormattingError> {
    writeln!(w, "{}{:<width$}{}", MARGIN, label, value, width = LABEL_WIDTH)?;
    Ok(())
}

/// Renders `value` with the given number of significant digits,
/// as `setprecision` does on a decimal stream.
fn significant_digits(value: f64, digits: usize) -> String {
    let magnitude = value.abs();
    let integer_digits = if magnitude < 1.0 {
        1
    } else {
        magnitude.log10().floor() as usize + 1
    };
    format!("{:.*}", digits.saturating_sub(integer_digits), value)
}
