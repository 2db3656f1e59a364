//! pigweb-web: HTTP surface for the harm–benefit calculator:
//!   - calculator page
//!   - JSON evaluation API
//!   - scenario presets and balance meter
//!   - printable report download
//!   - NCBI gene lookup

pub mod extract;
pub mod router;
pub mod handlers;
pub mod state;
