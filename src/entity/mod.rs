pub mod admin_log_entries;
pub mod products;
