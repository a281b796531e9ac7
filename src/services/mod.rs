pub mod football_data_client;
pub mod match_provider;

pub use football_data_client::FootballDataClient;
pub use match_provider::MatchProvider;
