
use super::*;
use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};
