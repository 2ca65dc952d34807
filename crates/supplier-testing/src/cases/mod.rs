mod case_11;

pub use case_11::case_11;
