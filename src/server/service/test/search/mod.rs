use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use super::{armory, grid_request, REALM, REALM_ID};
use crate::server::{error::AppError, service::search::SearchService};

mod search_characters;
