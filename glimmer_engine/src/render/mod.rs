pub mod render_opts;
pub mod renderer;
