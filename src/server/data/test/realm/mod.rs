use test_utils::builder::TestBuilder;

use super::TIMEOUT;
use crate::server::data::realm::RealmRepository;

mod get_charset;
