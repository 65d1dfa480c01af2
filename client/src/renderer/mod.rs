pub mod draw;
pub mod frame;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use std::sync::Arc;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use frame::Frame;
use game_core::{Config, Game};
use log::info;
use resources::GameBuffers;
use wgpu::*;
use winit::window::Window;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub rect_mesh: Mesh,
    pub circle_mesh: Mesh,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, config: &Config) -> Result<Self, String> {
        let ctx = init::init_wgpu(window).await?;
        let camera = Camera::orthographic(config.window_width, config.window_height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let rect_mesh = create_rectangle(&ctx.device);
        let circle_mesh = create_circle(&ctx.device, 32);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        info!(
            "Renderer ready: {}x{} surface, {:?}",
            ctx.config.width, ctx.config.height, ctx.config.format
        );

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            rect_mesh,
            circle_mesh,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Clear, draw the game and present
    pub fn render(&mut self, game: &Game) -> Result<(), String> {
        let mut frame = Frame::new();
        game.draw(&mut frame);
        draw::draw_frame(self, &frame)
    }
}
