/// An application registered on the governance server.
///
/// `repository_url` is the source-control URL configured for the application,
/// empty when none is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Application {
    pub id: String,
    pub public_id: String,
    pub name: String,
    pub repository_url: String,
}

/// An organization on the governance server that owns applications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub id: String,
    pub name: String,
}
