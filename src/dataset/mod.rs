pub mod cleaning;
pub mod encoder;
pub mod loader;

pub use cleaning::{clean, CleanRow, CleanedDataset, MAX_PRICE, MAX_SURFACE};
pub use encoder::RegionEncoder;
pub use loader::{load_dataset, parse_number, LoadedDataset, RawRow};
