mod cast;
mod mapped;
mod propagate;
mod typed;

pub use cast::{cast, cast_as};
pub use mapped::{MappedArray, map_array, map_value};
pub use propagate::{PropagateExt, propagate_if_unchecked};
pub use typed::{typed, typed_by};

#[cfg(test)]
mod mapped_test;
