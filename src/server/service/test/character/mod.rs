use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use super::{armory, REALM, REALM_ID};
use crate::server::{error::AppError, service::character::CharacterService};

mod get_achievements;
mod get_character;
mod get_pvp;
mod get_talents;
