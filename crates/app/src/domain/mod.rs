//! Ammo Tracker Domain Concerns

pub mod ammo;
