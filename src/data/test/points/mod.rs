use crate::{data::points::PointsRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod add_points;
mod get_score;
mod get_top;
