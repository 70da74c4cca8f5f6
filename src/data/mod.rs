pub mod csv;
pub mod labels;
pub mod toy;

pub use csv::{load_csv, parse_csv, Dataset};
pub use labels::LabelEncoder;
