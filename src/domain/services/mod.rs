//! Domain services containing core business logic.

mod horoscope_parser;

pub use horoscope_parser::*;
