pub mod clean_company_name;
pub mod clean_symbol;
pub mod column_index;
pub mod normalize_body;
pub mod open_csv_source;
pub mod parse_timestamp;

pub use clean_company_name::clean_company_name;
pub use clean_symbol::{clean_symbol, is_clean_symbol};
pub use column_index::column_index;
pub use normalize_body::normalize_body;
pub use open_csv_source::open_csv_source;
pub use parse_timestamp::parse_timestamp;
