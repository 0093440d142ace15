//! Supplier request and read types.
//!
//! Request types decode leniently: a missing field or an explicit `null`
//! becomes the empty value for its type. Type mismatches are still errors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Status assigned to every supplier at creation.
pub const STATUS_IN_PROGRESS: &str = "In Progress";

/// Storage-assigned supplier identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct SupplierId(pub i64);

impl fmt::Display for SupplierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NewAddress {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_main: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NewContact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_position: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mobile: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_main: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct NewGroup {
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

/// Body of `POST /suppliers`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CreateSupplierRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub supplier_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nick_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub addresses: Vec<NewAddress>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contacts: Vec<NewContact>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<NewGroup>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedSupplier {
    pub supplier_id: SupplierId,
}

/// Header row of a supplier as returned by `GET /suppliers`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SupplierSummary {
    pub id: SupplierId,
    pub name: String,
    pub nick_name: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
