// Pure aggregation pipeline: every function derives new collections from borrowed records
pub mod aggregate;
pub mod date_filter;
pub mod period;
pub mod prolabore;
pub mod summary;

pub use aggregate::{group_by_plan, is_highlighted};
pub use date_filter::{filter_by_date_range, filter_records, DateRange};
pub use period::{format_period_label, period_label};
pub use prolabore::{augment_operational, build_prolabore_record, prolabore_records, sum_prolabore_for_period};
pub use summary::calculate_summary;
