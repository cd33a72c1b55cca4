pub mod audit;
pub mod calculator;
pub mod daily;
pub mod monthly;
pub mod reconcile;
pub mod stamp;
pub mod status;
