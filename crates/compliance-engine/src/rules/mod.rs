//! Rule tables and checks feeding the classification decider

pub mod exclusions;
pub mod exemptions;
pub mod facility;
pub mod operating_hours;
