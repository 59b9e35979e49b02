pub mod breakdown;
pub mod hotel;
pub mod rate_override;
pub mod stay;
