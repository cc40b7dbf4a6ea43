//! Services: HTTP application assembly

pub mod https;
