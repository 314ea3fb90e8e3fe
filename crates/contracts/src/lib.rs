//! Типизированные контракты E-Shipping: нормализованные записи отгрузок,
//! строки расходов PSW, справочники и DTO ответов бэкенда JAGOTA.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
