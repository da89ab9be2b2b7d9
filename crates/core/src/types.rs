/// Record identifiers are assigned by the store, starting at 1.
pub type DbId = i64;
