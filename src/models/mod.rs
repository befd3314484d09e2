mod date_index;
mod quote;

pub use date_index::DateIndex;
pub use quote::DailyQuote;
