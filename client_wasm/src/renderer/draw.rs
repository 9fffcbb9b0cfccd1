use super::resources::{InstanceData, MAX_CIRCLES, MAX_RECTS};
use super::Renderer;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Skip this frame; the next one draws into the fresh swap chain
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let rect_count = upload(renderer, &renderer.buffers.rects, &renderer.rects, MAX_RECTS);
    let circle_count = upload(
        renderer,
        &renderer.buffers.circles,
        &renderer.circles,
        MAX_CIRCLES,
    );

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(renderer.clear_color),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.main_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

        // Quads (net, score digits, paddles)
        if rect_count > 0 {
            let mesh = &renderer.meshes.0;
            pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
            pass.set_vertex_buffer(1, renderer.buffers.rects.slice(..));
            pass.draw_indexed(0..mesh.index_count, 0, 0..rect_count);
        }

        // Discs (ball) on top
        if circle_count > 0 {
            let mesh = &renderer.meshes.1;
            pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
            pass.set_vertex_buffer(1, renderer.buffers.circles.slice(..));
            pass.draw_indexed(0..mesh.index_count, 0, 0..circle_count);
        }
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Copy up to `capacity` instances into `buffer`, returning how many to draw
fn upload(
    renderer: &Renderer,
    buffer: &Buffer,
    instances: &[InstanceData],
    capacity: usize,
) -> u32 {
    if instances.len() > capacity {
        log::warn!(
            "Dropping {} instances over buffer capacity {}",
            instances.len() - capacity,
            capacity
        );
    }
    let instances = &instances[..instances.len().min(capacity)];
    if !instances.is_empty() {
        renderer
            .queue
            .write_buffer(buffer, 0, bytemuck::cast_slice(instances));
    }
    instances.len() as u32
}
