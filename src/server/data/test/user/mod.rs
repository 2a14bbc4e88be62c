use chrono::{Duration, Utc};
use sea_orm::DbErr;
use serde_json::Map;
use test_utils::{builder::TestBuilder, factory::user::UserFactory};

use crate::server::{
    data::user::UserRepository,
    model::user::{UpdateProfileParams, UpsertUserParams, UserRole},
};

mod create;
mod search_by_email;
mod set_role;
