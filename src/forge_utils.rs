mod artifact;
mod build;
mod common;
mod verify;

pub use self::artifact::ContractArtifact;
pub use self::build::ForgeBuild;
pub use self::common::ContractSpec;
pub use self::verify::ForgeVerify;
