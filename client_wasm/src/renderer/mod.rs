//! WebGPU backend for the game's drawing surface
//!
//! Draw calls from `game_core::render` are batched into two instance lists,
//! quads and discs, and flushed in a single render pass by [`Renderer::present`].

pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use crate::text::layout_text;
use game_core::Color as Rgba;
use glam::Vec2;
use resources::{GameBuffers, InstanceData, MAX_CIRCLES, MAX_RECTS};
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle

    // Frame being recorded
    pub clear_color: Color,
    pub rects: Vec<InstanceData>,
    pub circles: Vec<InstanceData>,
}

impl Renderer {
    /// `width` x `height` are the playfield dimensions the camera maps onto
    /// the canvas
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        width: f32,
        height: f32,
    ) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas).await?;
        let camera = Camera::screen(width, height);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipeline(&ctx.device, ctx.config.format);

        let (vertices, indices) = create_rectangle();
        let rect_mesh = Mesh::new(&ctx.device, &ctx.queue, &vertices, &indices);
        let (vertices, indices) = create_circle(32);
        let circle_mesh = Mesh::new(&ctx.device, &ctx.queue, &vertices, &indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
            clear_color: Color::BLACK,
            rects: Vec::with_capacity(MAX_RECTS),
            circles: Vec::with_capacity(MAX_CIRCLES),
        })
    }

    /// Reconfigure the swap chain after the canvas backing size changes.
    /// The camera keeps mapping the whole playfield onto the canvas.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    /// Submit everything recorded since the last clear
    pub fn present(&mut self) -> Result<(), String> {
        draw::draw_frame(self)
    }
}

fn to_wgpu(color: Rgba) -> Color {
    let [r, g, b, a] = color.0;
    Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

impl game_core::Surface for Renderer {
    fn clear(&mut self, color: Rgba) {
        self.clear_color = to_wgpu(color);
        self.rects.clear();
        self.circles.clear();
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) {
        self.rects.push(InstanceData {
            transform: [pos.x, pos.y, size.x, size.y],
            tint: color.0,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push(InstanceData {
            transform: [center.x, center.y, radius, radius],
            tint: color.0,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Rgba) {
        for (pos, size) in layout_text(text, pos, size) {
            self.fill_rect(pos, size, color);
        }
    }
}
