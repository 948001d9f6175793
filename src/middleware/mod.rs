//! Request middleware: credential extraction and the role-based auth guard.

pub mod auth;

#[cfg(test)]
mod test;
