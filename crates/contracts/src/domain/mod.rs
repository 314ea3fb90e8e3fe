pub mod a001_shipment;
pub mod a002_psw_expense;
pub mod a003_reference;
pub mod a004_message;
