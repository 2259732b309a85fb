//! Graphics decoding for the packed tile data
//!
//! This module reconstructs raster images from the four-plane EGA bitmap
//! format the tiles are stored in.

// Declare submodules
pub mod ega;
pub mod tile;

// Re-export commonly used items for convenience
pub use tile::{decode_tile, RawTile};
