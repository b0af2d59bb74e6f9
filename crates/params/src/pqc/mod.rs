//! Post-quantum parameter profiles

pub mod lwekem;
