mod marshal;

pub use marshal::Marshal;
