use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the horoscope HTTP API
    Serve {
        #[arg(short, long, default_value = "9999")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Answer a single request and print the JSON body
    Horoscope {
        sign: String,

        /// Rewrite the summary of the cached horoscope instead of asking for a new one
        #[arg(long)]
        use_cache: bool,
    },
}
