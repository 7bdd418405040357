mod in_memory_horoscope_cache;
mod mock_chat_client;
mod openrouter_client;

pub use in_memory_horoscope_cache::*;
pub use mock_chat_client::*;
pub use openrouter_client::*;
