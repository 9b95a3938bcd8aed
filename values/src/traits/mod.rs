mod array_view;

pub use array_view::ArrayView;
