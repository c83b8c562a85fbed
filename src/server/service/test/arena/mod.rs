use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use super::{armory, grid_request, REALM};
use crate::server::{error::AppError, service::arena::ArenaService};

mod get_index;
mod get_ladder;
mod get_team;
