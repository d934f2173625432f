//! Serializers for the generated dataset: delimited files and SQL
//! INSERT statements, both fed from the same in-memory record sets.

pub mod csv;
pub mod sql;
