pub mod expiry;
pub mod number_format;
pub mod plan_restriction;

pub use expiry::{classify, expiry_status, expiry_style, parse_expiry_date};
pub use number_format::{format_count, format_number};
pub use plan_restriction::{
    allowance, check_restriction, decide, product_restriction, sales_rep_restriction,
    sales_restriction, store_restriction,
};
