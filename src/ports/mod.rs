/// Ports module defining interfaces for hexagonal architecture
///
/// The audit only drives outbound ports; the CLI calls the use case directly.
pub mod outbound;
