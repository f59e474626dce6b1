pub mod batch;
pub mod extract;
pub mod profile;
pub mod review;
