use std::collections::HashSet;

use crate::models::{CastingProject, ProjectStatus, Stats, TalentProfile};

/// Dashboard counters derived from registry snapshots
pub fn compute_stats(talents: &[TalentProfile], projects: &[CastingProject]) -> Stats {
    let count_status = |status: ProjectStatus| projects.iter().filter(|p| p.status == status).count();

    let clients: HashSet<&str> = projects.iter().map(|p| p.client_id.as_str()).collect();

    Stats {
        total_talents: talents.len(),
        active_castings: count_status(ProjectStatus::Open),
        completed_castings: count_status(ProjectStatus::Completed),
        total_clients: clients.len(),
    }
}
