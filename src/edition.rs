// src/edition.rs
use chrono::{DateTime, Datelike, FixedOffset, Utc, Weekday};

// Brazil dropped DST in 2019; São Paulo sits at a fixed -03:00.
const SAO_PAULO_OFFSET_SECS: i32 = -3 * 3600;

/// The two date renderings one edition needs: a filename key and the
/// human-readable label the editor prompt and the masthead use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionDate {
    /// `YYYY-MM-DD`, used for the archive filename.
    pub key: String,
    /// e.g. "Sexta-feira, 21 de agosto de 2026".
    pub label: String,
}

impl EditionDate {
    pub fn today() -> Self {
        let offset = FixedOffset::east_opt(SAO_PAULO_OFFSET_SECS).expect("valid utc offset");
        Self::from_datetime(Utc::now().with_timezone(&offset))
    }

    pub fn from_datetime(dt: DateTime<FixedOffset>) -> Self {
        let key = dt.format("%Y-%m-%d").to_string();
        let label = format!(
            "{}, {:02} de {} de {}",
            weekday_pt(dt.weekday()),
            dt.day(),
            month_pt(dt.month()),
            dt.year()
        );
        Self { key, label }
    }
}

fn weekday_pt(w: Weekday) -> &'static str {
    match w {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

fn month_pt(m: u32) -> &'static str {
    const MONTHS: [&str; 12] = [
        "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
        "outubro", "novembro", "dezembro",
    ];
    MONTHS[(m as usize).saturating_sub(1).min(11)]
}
