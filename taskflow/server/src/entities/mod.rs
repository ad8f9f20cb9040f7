//! `SeaORM` entities for the task store.

pub mod sea_orm_active_enums;
pub mod todo;
