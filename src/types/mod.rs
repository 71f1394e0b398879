//! Core types for the autojoin plugin
//!
//! Host-agnostic types shared by the capability API and the hooks.

pub mod team;
pub mod team_member;
pub mod user;

// Re-export for convenience
pub use team::{Team, TeamType};
pub use team_member::TeamMember;
pub use user::User;
