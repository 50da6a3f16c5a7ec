pub mod contents_json;
pub mod glyph;
pub mod icon_gen;
pub mod palette;
pub mod raster;
