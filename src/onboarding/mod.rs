/// Onboarding domain
///
/// Models of the source host and the governance server as the audit sees
/// them, and the rules deciding what to do with each repository.
pub mod domain;
pub mod policies;
