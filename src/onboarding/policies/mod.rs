pub mod existing_application;

pub use existing_application::ExistingApplicationPolicy;
