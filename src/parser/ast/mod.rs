pub mod query;
pub use query::*;

pub mod distinct_parser;
pub use distinct_parser::*;

pub mod limit_parser;
pub use limit_parser::*;

pub mod order_by;
pub use order_by::*;

pub mod group_by;
pub use group_by::*;

pub mod where_parser;
pub use where_parser::*;

pub mod condition;
pub use condition::*;

pub mod comparer;
pub use comparer::*;

pub mod join;
pub use join::*;

pub mod projection_parser;
pub use projection_parser::*;

pub mod aggregate_guard;
pub use aggregate_guard::*;
