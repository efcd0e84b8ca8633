mod decimate;

pub use decimate::Decimator;
