use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use super::TIMEOUT;
use crate::server::data::arena_team::ArenaTeamRepository;

mod find_by_name;
mod get_members;
