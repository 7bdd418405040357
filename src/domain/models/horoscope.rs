use chrono::Local;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Colors picked when the model does not name one.
pub const COLOR_PALETTE: [&str; 6] = [
    "Azul Celestial",
    "Verde Esperança",
    "Vermelho Paixão",
    "Roxo Místico",
    "Amarelo Solar",
    "Laranja Energético",
];

pub const DEFAULT_ADVICE: &str = "Lembre-se: rir é o melhor remédio.";
pub const DEFAULT_SUMMARY: &str =
    "O Oráculo está tirando uma soneca, mas te deseja um dia... interessante!";

/// Inclusive bounds of the lucky number drawn when the model omits one.
pub const LUCKY_NUMBER_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

const DATE_FORMAT: &str = "%d/%m/%Y";

/// A fully populated daily horoscope.
///
/// Every field always holds a value: either what the parser extracted from the
/// model reply or a default chosen before extraction started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoroscopeRecord {
    description: String,
    lucky_number: u32,
    color: String,
    advice: String,
    summary: String,
    date: String,
}

impl HoroscopeRecord {
    pub fn new(
        description: impl Into<String>,
        lucky_number: u32,
        color: impl Into<String>,
        advice: impl Into<String>,
        summary: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            lucky_number,
            color: color.into(),
            advice: advice.into(),
            summary: summary.into(),
            date: date.into(),
        }
    }

    /// Record holding only defaults, with `description` set to the raw text.
    pub fn with_defaults<R: Rng + ?Sized>(description: impl Into<String>, rng: &mut R) -> Self {
        let color = COLOR_PALETTE
            .choose(rng)
            .copied()
            .unwrap_or(COLOR_PALETTE[0]);

        Self {
            description: description.into(),
            lucky_number: rng.gen_range(LUCKY_NUMBER_RANGE),
            color: color.to_string(),
            advice: DEFAULT_ADVICE.to_string(),
            summary: DEFAULT_SUMMARY.to_string(),
            date: today(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn lucky_number(&self) -> u32 {
        self.lucky_number
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn advice(&self) -> &str {
        &self.advice
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    pub(crate) fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub(crate) fn set_lucky_number(&mut self, lucky_number: u32) {
        self.lucky_number = lucky_number;
    }

    pub(crate) fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    pub(crate) fn set_advice(&mut self, advice: impl Into<String>) {
        self.advice = advice.into();
    }

    /// True when both records carry the same horoscope, summary aside.
    pub fn same_reading(&self, other: &HoroscopeRecord) -> bool {
        self.description == other.description
            && self.lucky_number == other.lucky_number
            && self.color == other.color
            && self.advice == other.advice
            && self.date == other.date
    }

    /// Same record with a different summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}

/// Today's local date as `DD/MM/YYYY`.
pub fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}
