use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::server::{data::tracking::TrackingLogRepository, model::tracking::CreateTrackingLogParams};

mod get_by_tracking_id;
