mod get_horoscope;
mod prompts;
mod rebel_summary;

pub use get_horoscope::*;
pub use prompts::*;
pub use rebel_summary::*;
