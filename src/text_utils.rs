use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

const MONTH_TITLES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho",
    "Julho", "Agosto", "Setembro", "Outubro", "Novembro", "Dezembro",
];

const MONTH_ABBRS: [&str; 12] = [
    "JAN", "FEV", "MAR", "ABR", "MAI", "JUN",
    "JUL", "AGO", "SET", "OUT", "NOV", "DEZ",
];

/// Escapes the five reserved HTML characters. The ampersand goes first so the
/// entities inserted afterwards are not escaped again.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Lower-cases the text, turns spaces into hyphens and drops anything outside `[a-z0-9-]`.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_day(date: &NaiveDate) -> String {
    date.format("%d").to_string()
}

pub fn month_name(date: &NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

pub fn month_title(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_TITLES[(month - 1) as usize],
        _ => "Mês inválido",
    }
}

pub fn month_abbr(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_ABBRS[(month - 1) as usize],
        _ => "",
    }
}
