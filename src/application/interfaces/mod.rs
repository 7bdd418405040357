mod chat_client;
mod horoscope_cache;

pub use chat_client::*;
pub use horoscope_cache::*;
