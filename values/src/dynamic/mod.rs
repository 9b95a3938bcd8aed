mod array;
mod value;

pub use array::Array;
pub use value::Value;
