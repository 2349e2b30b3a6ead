pub mod client;
pub mod config;
pub mod dto;
pub mod path;
pub mod repo;

pub use client::ApiClient;
pub use config::{AuthScheme, ClientConfig, API_URL};
pub use path::ApiPath;
pub use repo::ClickUpRepository;
