pub mod aggregate;
pub mod expense_code;
pub mod request;

pub use aggregate::ExpenseLineItem;
pub use expense_code::{ExpenseCode, ExpenseCodeTable};
pub use request::SubmitExpensesRequest;
