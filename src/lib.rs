//! Remote Content Filter — per-folder remote-content decisions for mail.
//!
//! Decides, for each newly arrived message, whether remote content
//! (external images, trackers) should be blocked, allowed, or left to the
//! host mail client's default policy, based on pattern rules matched
//! against the containing folder's name.

pub mod config;
pub mod error;
pub mod policy;
