use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::payment::PaymentFactory};
use uuid::Uuid;

use crate::server::{data::payment::PaymentRepository, model::payment::CreatePaymentParams};

mod create;
mod get_all;
mod summary_by_email;
