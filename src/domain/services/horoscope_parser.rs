use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;
use tracing::debug;

use crate::domain::HoroscopeRecord;

/// Description used when the model replied with nothing but whitespace.
pub const SILENT_REPLY_DESCRIPTION: &str = "As estrelas ficaram em silêncio hoje.";

/// A labeled section of the model reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Description,
    LuckyNumber,
    Color,
    Advice,
    Summary,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Description,
        Section::LuckyNumber,
        Section::Color,
        Section::Advice,
        Section::Summary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Description => "Descrição:",
            Section::LuckyNumber => "Número da Sorte:",
            Section::Color => "Cor:",
            Section::Advice => "Conselho:",
            Section::Summary => "Resumindo:",
        }
    }

    /// Labels that end this section's capture. The model tends to emit the
    /// sections in canonical order, so the later sections only stop at the
    /// labels that normally follow them.
    fn terminators(self) -> &'static [Section] {
        match self {
            Section::Description => &[
                Section::LuckyNumber,
                Section::Color,
                Section::Advice,
                Section::Summary,
            ],
            Section::LuckyNumber => &[
                Section::Description,
                Section::Color,
                Section::Advice,
                Section::Summary,
            ],
            Section::Color => &[Section::Advice, Section::Summary],
            Section::Advice => &[Section::Summary],
            Section::Summary => &[],
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

static SECTION_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
static FOREIGN_LABEL_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
static LEADING_DESCRIPTION_LABEL: OnceLock<Regex> = OnceLock::new();

fn section_pattern(section: Section) -> &'static Regex {
    let patterns = SECTION_PATTERNS.get_or_init(|| {
        Section::ALL
            .iter()
            .map(|&s| {
                let mut stops: Vec<String> = s
                    .terminators()
                    .iter()
                    .map(|t| regex::escape(t.label()))
                    .collect();
                stops.push(r"\z".to_string());
                let pattern = format!(
                    r"(?ims){}\s*(.*?)(?:{})",
                    regex::escape(s.label()),
                    stops.join("|")
                );
                Regex::new(&pattern).expect("section pattern is valid")
            })
            .collect()
    });
    &patterns[section.index()]
}

/// Matches any label other than `section`'s own.
fn foreign_label_pattern(section: Section) -> &'static Regex {
    let patterns = FOREIGN_LABEL_PATTERNS.get_or_init(|| {
        Section::ALL
            .iter()
            .map(|&s| {
                let alternatives: Vec<String> = Section::ALL
                    .iter()
                    .filter(|&&other| other != s)
                    .map(|other| regex::escape(other.label()))
                    .collect();
                let pattern = format!("(?i){}", alternatives.join("|"));
                Regex::new(&pattern).expect("label pattern is valid")
            })
            .collect()
    });
    &patterns[section.index()]
}

fn leading_description_label() -> &'static Regex {
    LEADING_DESCRIPTION_LABEL
        .get_or_init(|| Regex::new(r"(?i)\A\s*Descrição:\s*").expect("label pattern is valid"))
}

fn strip_emphasis(value: &str) -> String {
    value.replace('*', "").trim().to_string()
}

/// Leading run of ASCII digits, if it fits a `u32`.
fn leading_integer(value: &str) -> Option<u32> {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

/// Working state shared by the extraction strategies.
struct ParseState<'a> {
    text: &'a str,
    record: HoroscopeRecord,
    defaults: HoroscopeRecord,
    description_extracted: bool,
}

type Strategy = fn(&mut ParseState<'_>);

/// Steps applied in order to the default record. None of them can fail; each
/// either improves a field or leaves it alone.
const STRATEGIES: [(&str, Strategy); 4] = [
    ("labeled sections", extract_labeled_sections),
    ("description recovery", recover_description),
    ("label bleed", trim_label_bleed),
    ("summary dedup", dedupe_summary),
];

fn extract_labeled_sections(state: &mut ParseState<'_>) {
    for section in Section::ALL {
        let Some(captures) = section_pattern(section).captures(state.text) else {
            continue;
        };
        let value = strip_emphasis(captures.get(1).map_or("", |m| m.as_str()));
        if value.is_empty() {
            continue;
        }

        match section {
            Section::Description => {
                state.record.set_description(value);
                state.description_extracted = true;
            }
            Section::LuckyNumber => {
                if let Some(number) = leading_integer(&value) {
                    state.record.set_lucky_number(number);
                }
            }
            Section::Color => state.record.set_color(value),
            Section::Advice => state.record.set_advice(value),
            Section::Summary => state.record.set_summary(value),
        }
    }
}

fn recover_description(state: &mut ParseState<'_>) {
    if state.description_extracted && state.record.description() != state.text {
        return;
    }

    let cut = foreign_label_pattern(Section::Description)
        .find(state.text)
        .map_or(state.text.len(), |m| m.start());
    let head = leading_description_label().replace(&state.text[..cut], "");
    let mut description = strip_emphasis(&head);

    if description.is_empty() {
        description = state
            .text
            .lines()
            .map(strip_emphasis)
            .find(|line| !line.is_empty())
            .unwrap_or_else(|| SILENT_REPLY_DESCRIPTION.to_string());
    }

    state.record.set_description(description);
}

fn trim_label_bleed(state: &mut ParseState<'_>) {
    for section in [Section::Color, Section::Advice, Section::Summary] {
        let value = match section {
            Section::Color => state.record.color(),
            Section::Advice => state.record.advice(),
            _ => state.record.summary(),
        };
        let Some(found) = foreign_label_pattern(section).find(value) else {
            continue;
        };

        let truncated = value[..found.start()].trim().to_string();
        let replacement = if truncated.is_empty() {
            match section {
                Section::Color => state.defaults.color().to_string(),
                Section::Advice => state.defaults.advice().to_string(),
                _ => state.defaults.summary().to_string(),
            }
        } else {
            truncated
        };

        match section {
            Section::Color => state.record.set_color(replacement),
            Section::Advice => state.record.set_advice(replacement),
            _ => state.record.set_summary(replacement),
        }
    }
}

/// Models sometimes repeat the whole horoscope in the closing remark; keep
/// only its first sentence when it restates the lucky number or the color.
fn dedupe_summary(state: &mut ParseState<'_>) {
    let summary = state.record.summary().to_lowercase();
    let number_phrase = format!("número da sorte é {}", state.record.lucky_number());
    let color_phrase = format!("cor {}", state.record.color().to_lowercase());

    if !summary.contains(&number_phrase) && !summary.contains(&color_phrase) {
        return;
    }

    let first = state
        .record
        .summary()
        .split('.')
        .next()
        .unwrap_or_default()
        .trim();
    if !first.is_empty() {
        let sentence = format!("{first}.");
        state.record.set_summary(sentence);
    }
}

/// Turns a free-text model reply into a [`HoroscopeRecord`].
///
/// Parsing never fails: the record is filled with defaults before any
/// extraction is attempted, and every section the reply lacks (or garbles)
/// simply keeps its default.
#[derive(Debug, Clone, Copy, Default)]
pub struct HoroscopeParser;

impl HoroscopeParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, raw_text: &str) -> HoroscopeRecord {
        self.parse_with_rng(raw_text, &mut rand::thread_rng())
    }

    /// Like [`Self::parse`], drawing the random defaults from `rng`.
    pub fn parse_with_rng<R: Rng + ?Sized>(&self, raw_text: &str, rng: &mut R) -> HoroscopeRecord {
        let text = raw_text.trim();
        let defaults = HoroscopeRecord::with_defaults(text, rng);

        let mut state = ParseState {
            text,
            record: defaults.clone(),
            defaults,
            description_extracted: false,
        };

        for (name, strategy) in STRATEGIES {
            strategy(&mut state);
            debug!("Parser step '{}' done", name);
        }

        state.record
    }
}
