//! Horizontal bar charts for terminal output.

/// Widest bar, in characters.
pub const DEFAULT_BAR_WIDTH: usize = 40;

const BAR: char = '█';

/// Render labelled values as horizontal bars scaled to the largest value.
///
/// Any positive value gets at least one block so it stays visible next to
/// much larger bars.
pub fn bar_chart(entries: &[(String, f64)], max_width: usize) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let max_value = entries
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for (label, value) in entries {
        let len = if max_value > 0.0 && *value > 0.0 {
            ((value / max_value) * max_width as f64).round().max(1.0) as usize
        } else {
            0
        };
        let bar: String = std::iter::repeat(BAR).take(len).collect();
        out.push_str(&format!(
            "{:<lw$}  {} {}\n",
            label,
            bar,
            format_value(*value),
            lw = label_width
        ));
    }
    out
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}
