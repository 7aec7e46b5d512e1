pub mod backup;
pub mod calc;
pub mod export;
pub mod history;
pub mod library;
pub mod practice;
pub mod vibration;
