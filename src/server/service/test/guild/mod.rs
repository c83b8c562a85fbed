use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use super::{armory, grid_request, REALM_ID};
use crate::server::{error::AppError, service::guild::GuildService};

mod get_guild;
mod get_members;
