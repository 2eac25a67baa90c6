mod root;

pub use root::StonksApp;
