pub mod assemble_report;
pub mod balance_check;
pub mod protein_dao;
pub mod stats;
pub mod verify_source;
