//! Infrastructure layer: concrete stores behind the domain's repository traits.

pub mod repository;
