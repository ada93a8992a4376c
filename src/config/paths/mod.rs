//! Platform paths used by config and logging.

pub mod xdg_root;
