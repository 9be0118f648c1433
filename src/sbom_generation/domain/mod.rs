pub mod component;
pub mod dependency;
pub mod sbom;

pub use component::Component;
pub use dependency::{Dependency, PackageManager};
pub use sbom::Sbom;
