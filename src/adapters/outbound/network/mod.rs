/// Network adapters for the source host and governance server APIs
mod github_client;
mod iq_client;

pub use github_client::GitHubClient;
pub use iq_client::IqClient;
