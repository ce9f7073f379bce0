use crate::core::rasterizer::CullMode;
use crate::error::Result;
use crate::io::config::Config;
use crate::io::image::save_image;
use crate::pipeline::renderer::{RenderOptions, RenderStats, Renderer};
use crate::pipeline::shaders::ShadingMode;
use crate::scene::loader::init_scene_resources;
use log::info;
use nalgebra::Vector3;
use std::time::Instant;

/// Frame settings from `[render]`. Fails on an unknown shading mode.
pub fn render_options(config: &Config) -> Result<RenderOptions> {
    Ok(RenderOptions {
        shading: config.render.shading.parse::<ShadingMode>()?,
        background: Vector3::from(config.render.background_color),
        ambient_light: Vector3::from(config.render.ambient_light),
    })
}

/// Renders the configured scene once and writes the image to
/// `config.render.output`.
pub fn run(config: &Config) -> Result<RenderStats> {
    // Validate the frame settings before any heavy loading
    let options = render_options(config)?;
    let cull_mode = config.render.cull_mode.parse::<CullMode>()?;

    let context = init_scene_resources(config)?;

    let mut renderer = Renderer::new(config.render.width, config.render.height);
    renderer.set_cull_mode(cull_mode);

    info!(
        "Rendering {}x{} in {} mode...",
        config.render.width, config.render.height, options.shading
    );
    let start_time = Instant::now();
    let stats = renderer.render(&context, &options);
    info!("Render completed in {:.2?}", start_time.elapsed());

    save_image(&renderer.present(), &config.render.output)?;
    Ok(stats)
}
