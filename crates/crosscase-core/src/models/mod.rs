pub mod attribute_type;
pub mod match_index;
pub mod matched_value;

pub use attribute_type::AttributeType;
pub use match_index::{MatchIndex, ValueList};
pub use matched_value::{FileRef, MatchedValue, ValueInstance};
