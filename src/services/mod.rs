// Service exports
pub mod brief;
pub mod registry;
pub mod seed;
pub mod sessions;

pub use brief::{BriefError, BriefGenerator, GeminiClient};
pub use registry::{InMemoryRegistry, ProjectRegistry, RegistryError, TalentRegistry};
pub use sessions::{BriefSessions, SessionError};
