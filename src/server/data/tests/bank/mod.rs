use bankdash_test_utils::prelude::*;
use bson::oid::ObjectId;
use entity::bank_service::BankUpdate;

use crate::server::{data::bank::BankRepository, error::repository::RepositoryError};

mod create;
mod get_by_id;
