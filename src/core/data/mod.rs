pub mod anti_aliasing;
pub mod colour;
pub mod complex;
pub mod frame_params;
pub mod palette;
pub mod pixel_buffer;
pub mod point;
pub mod view_state;
pub mod viewport;
