pub mod color_scheme;
