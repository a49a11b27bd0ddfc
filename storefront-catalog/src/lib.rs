pub mod pricing;

pub use pricing::{calculate_discount, DiscountSchedule, DiscountTier};
