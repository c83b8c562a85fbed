use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use super::TIMEOUT;
use crate::server::data::world::ItemTemplateRepository;

mod get_socket_bonuses;
