mod horoscope;
mod horoscope_request;

pub use horoscope::*;
pub use horoscope_request::*;
