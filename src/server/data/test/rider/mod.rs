use sea_orm::DbErr;
use serde_json::{json, Map};
use test_utils::{builder::TestBuilder, factory::rider::RiderFactory};
use uuid::Uuid;

use crate::server::{data::rider::RiderRepository, model::rider::CreateRiderParams};

mod create;
mod get_by_status;
mod update_status;
