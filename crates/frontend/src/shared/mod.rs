pub mod api_client;
pub mod config;
pub mod export;
pub mod icons;
pub mod poller;
pub mod request_sequence;
