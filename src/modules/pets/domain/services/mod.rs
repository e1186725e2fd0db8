pub mod set_reconciliation;

pub use set_reconciliation::{reconcile, SetDelta};
