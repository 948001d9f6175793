use crate::data::restaurant::RestaurantRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod clear_expired_promotions;
mod create;
mod promote;
