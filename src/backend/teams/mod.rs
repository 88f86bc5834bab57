//! Teams
//!
//! Coaches create teams; students join one team at a time through the
//! `users.team_id` foreign key.

pub mod db;
pub mod handlers;

pub use db::Team;
pub use handlers::{create_team, get_team, join_team, list_teams, CreateTeamRequest};
