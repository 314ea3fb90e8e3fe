pub mod api;
pub mod calculator;
pub mod state;

pub use calculator::{recalculate, ExpenseField, ExpenseTotals};
pub use state::ExpenseFormState;
