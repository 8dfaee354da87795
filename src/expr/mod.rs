pub mod binary;
pub mod cond;
pub mod group;
pub mod order;
pub mod unary;

pub use binary::{Comparison, IntoComparison};
pub use cond::{Condition, Conditions};
pub use group::GroupCondition;
pub use order::{IntoOrdering, Order, Ordering};
pub use unary::NullCheck;
