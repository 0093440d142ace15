//! Supplier services. Both take the pool at construction and bound every
//! call by a deadline; an elapsed deadline drops the in-flight work.

mod supplier_read;
mod supplier_write;
pub use supplier_read::SupplierReadService;
pub use supplier_write::SupplierWriteService;
