//! Number and date formatting for end-of-turn text.

use crate::config::GameConfig;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MAX_FIXED_PLACES: usize = 6;
const MAX_SCI_PLACES: usize = 8;
const FALLBACK_PLACES: usize = 3;

/// Fixed-point formatting with `places` decimals.
///
/// Zero places truncates toward zero; more than six places falls back to three.
pub fn fmt_places(value: f32, places: usize) -> String {
    match places {
        0 => (value as i32).to_string(),
        1..=MAX_FIXED_PLACES => format!("{value:.places$}"),
        _ => format!("{:.*}", FALLBACK_PLACES, value),
    }
}

/// Picks a precision based on magnitude: small values get more decimals,
/// values of ten or more are truncated to integers.
pub fn fmt_auto(value: f32) -> String {
    if value.abs() < 0.0005 {
        "0".to_string()
    } else if value < 0.1 {
        fmt_places(value, 3)
    } else if value < 1.0 {
        fmt_places(value, 2)
    } else if value < 10.0 {
        fmt_places(value, 1)
    } else {
        fmt_places(value, 0)
    }
}

/// Scientific notation such as `1.235e03` or `4.00e-02`.
///
/// The mantissa carries `places` decimals (1..=8, otherwise 3) and the
/// exponent is at least two digits.
pub fn sci_fmt(value: f32, places: usize) -> String {
    let places = if (1..=MAX_SCI_PLACES).contains(&places) {
        places
    } else {
        FALLBACK_PLACES
    };

    let value = f64::from(value);
    if value == 0.0 || !value.is_finite() {
        return format!("{:.places$}e00", 0.0);
    }

    let mut exponent = value.abs().log10().floor() as i32;
    let scale = 10f64.powi(places as i32);
    let mut mantissa = (value * 10f64.powi(places as i32 - exponent)).round() / scale;
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    }

    let sign = if exponent < 0 { "-" } else { "" };
    format!("{mantissa:.places$}e{sign}{:02}", exponent.unsigned_abs())
}

/// Calendar label for a fractional year, e.g. `2310.Feb.16`.
pub fn star_date(year: f32) -> String {
    let whole = year as i32;
    let months = (year - whole as f32) * 12.0;
    let month = (months as usize).min(MONTH_NAMES.len() - 1);
    let day = ((months - month as f32) * 30.0) as u32 + 1;
    format!("{whole}.{}.{day}", MONTH_NAMES[month])
}

/// Header label for the current turn, either the in-game year or the turn
/// number depending on [`GameConfig::display_year`].
#[derive(Clone, Copy, Debug)]
pub struct TurnDisplay<'a> {
    config: &'a GameConfig,
}

impl<'a> TurnDisplay<'a> {
    pub const fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    pub fn label(&self, turn: u32) -> String {
        if self.config.display_year {
            format!("Year {}", self.config.year_of_turn(turn))
        } else {
            format!("Turn {turn}")
        }
    }
}
