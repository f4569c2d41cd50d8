// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AgeLabel, CastingBrief, CastingProject, CastingRole, ClientRef, Demo, Gender, ProjectStatus, RoleSpec, Stats, TalentProfile};
pub use requests::{AnalyzeBriefRequest, ConfirmBriefRequest, CreateProjectRequest, SelectTalentRequest, UpdateStatusRequest};
pub use responses::{BriefProposalResponse, BriefSessionResponse, ErrorResponse, FindMatchesResponse, HealthResponse, ProposedRole};
