use crate::{data::setting::SettingRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get;
mod set;
