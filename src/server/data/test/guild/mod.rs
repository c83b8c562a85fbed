use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use super::TIMEOUT;
use crate::server::data::guild::GuildRepository;

mod count_members;
mod exists;
mod find_by_name;
mod get_ranks;
