pub mod builtin;
pub mod model_io;
pub mod reader;
pub mod records;

pub use builtin::load_sample;
pub use model_io::{load_weights, save_weights, ModelWeights};
pub use reader::{read_records, read_records_gz};
pub use records::MoleculeRecord;
