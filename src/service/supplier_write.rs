//! Transactional creation of a supplier and its nested rows.

use crate::error::AppError;
use crate::model::{CreateSupplierRequest, NewAddress, NewContact, NewGroup, SupplierId, STATUS_IN_PROGRESS};
use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use std::time::Duration;

const INSERT_SUPPLIER: &str =
    "INSERT INTO suppliers (name, nick_name, status) VALUES ($1, $2, $3) RETURNING id";
const INSERT_ADDRESS: &str =
    "INSERT INTO supplier_addresses (supplier_id, name, address, is_main) VALUES ($1, $2, $3, $4)";
const INSERT_CONTACT: &str = "INSERT INTO supplier_contacts (supplier_id, name, job_position, email, phone, mobile, is_main) VALUES ($1, $2, $3, $4, $5, $6, $7)";
const INSERT_GROUP: &str =
    "INSERT INTO supplier_groups (supplier_id, group_name, value, is_active) VALUES ($1, $2, $3, $4)";

#[derive(Clone)]
pub struct SupplierWriteService {
    pool: PgPool,
    deadline: Duration,
}

impl SupplierWriteService {
    pub fn new(pool: PgPool, deadline: Duration) -> Self {
        Self { pool, deadline }
    }

    /// Insert the supplier header, then every address, contact and group in
    /// input order, inside one transaction. Returns the new supplier id.
    ///
    /// The deadline bounds `BEGIN` and the inserts only. If it elapses, the
    /// uncommitted `Transaction` is dropped, which aborts it. `COMMIT` runs
    /// outside the deadline, so a reported error always means nothing was
    /// persisted.
    pub async fn create(&self, request: &CreateSupplierRequest) -> Result<SupplierId, AppError> {
        let (tx, supplier_id) = tokio::time::timeout(self.deadline, self.insert_all(request))
            .await
            .map_err(|_| AppError::Timeout)??;

        tx.commit().await.map_err(AppError::Commit)?;
        tracing::info!(
            supplier_id = %supplier_id,
            addresses = request.addresses.len(),
            contacts = request.contacts.len(),
            groups = request.groups.len(),
            "supplier created"
        );
        Ok(supplier_id)
    }

    async fn insert_all(
        &self,
        request: &CreateSupplierRequest,
    ) -> Result<(Transaction<'static, Postgres>, SupplierId), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::BeginTransaction)?;

        let supplier_id = insert_supplier(&mut tx, request).await?;
        for address in &request.addresses {
            insert_address(&mut tx, supplier_id, address).await?;
        }
        for contact in &request.contacts {
            insert_contact(&mut tx, supplier_id, contact).await?;
        }
        for group in &request.groups {
            insert_group(&mut tx, supplier_id, group).await?;
        }
        Ok((tx, supplier_id))
    }
}

async fn insert_supplier(
    conn: &mut PgConnection,
    request: &CreateSupplierRequest,
) -> Result<SupplierId, AppError> {
    tracing::debug!(sql = %INSERT_SUPPLIER, "query (tx)");
    sqlx::query_scalar::<_, SupplierId>(INSERT_SUPPLIER)
        .bind(&request.supplier_name)
        .bind(&request.nick_name)
        .bind(STATUS_IN_PROGRESS)
        .fetch_one(&mut *conn)
        .await
        .map_err(AppError::CreateSupplier)
}

async fn insert_address(
    conn: &mut PgConnection,
    supplier_id: SupplierId,
    address: &NewAddress,
) -> Result<(), AppError> {
    tracing::debug!(sql = %INSERT_ADDRESS, "query (tx)");
    sqlx::query(INSERT_ADDRESS)
        .bind(supplier_id)
        .bind(&address.name)
        .bind(&address.address)
        .bind(address.is_main)
        .execute(&mut *conn)
        .await
        .map_err(AppError::SaveAddress)?;
    Ok(())
}

async fn insert_contact(
    conn: &mut PgConnection,
    supplier_id: SupplierId,
    contact: &NewContact,
) -> Result<(), AppError> {
    tracing::debug!(sql = %INSERT_CONTACT, "query (tx)");
    sqlx::query(INSERT_CONTACT)
        .bind(supplier_id)
        .bind(&contact.name)
        .bind(&contact.job_position)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.mobile)
        .bind(contact.is_main)
        .execute(&mut *conn)
        .await
        .map_err(AppError::SaveContact)?;
    Ok(())
}

async fn insert_group(
    conn: &mut PgConnection,
    supplier_id: SupplierId,
    group: &NewGroup,
) -> Result<(), AppError> {
    tracing::debug!(sql = %INSERT_GROUP, "query (tx)");
    sqlx::query(INSERT_GROUP)
        .bind(supplier_id)
        .bind(&group.group_name)
        .bind(&group.value)
        .bind(group.is_active)
        .execute(&mut *conn)
        .await
        .map_err(AppError::SaveGroup)?;
    Ok(())
}
