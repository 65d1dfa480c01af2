use super::resources::{InstanceData, MAX_CIRCLES, MAX_RECTS};
use super::{frame::Frame, Renderer};
use crate::mesh::Mesh;
use log::warn;
use wgpu::*;

pub fn draw_frame(renderer: &mut Renderer, frame: &Frame) -> Result<(), String> {
    let output = match renderer.surface.get_current_texture() {
        Ok(output) => output,
        Err(SurfaceError::Lost | SurfaceError::Outdated) => {
            // Reconfigure and skip this frame
            renderer
                .surface
                .configure(&renderer.device, &renderer.surface_config);
            return Ok(());
        }
        Err(e) => return Err(format!("Failed to get current texture: {:?}", e)),
    };
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer.device.create_command_encoder(&CommandEncoderDescriptor {
        label: Some("Render Encoder"),
    });

    let rect_count = upload(renderer, &renderer.buffers.rects, &frame.rects, MAX_RECTS);
    let circle_count = upload(renderer, &renderer.buffers.circles, &frame.circles, MAX_CIRCLES);

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Main Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color::BLACK),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.main_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

        // Rects (paddles, text)
        draw_instances(&mut pass, &renderer.rect_mesh, &renderer.buffers.rects, rect_count);
        // Circle (ball)
        draw_instances(&mut pass, &renderer.circle_mesh, &renderer.buffers.circles, circle_count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

/// Write instances into `buffer`, dropping any beyond `capacity`
fn upload(renderer: &Renderer, buffer: &Buffer, instances: &[InstanceData], capacity: usize) -> u32 {
    let count = if instances.len() > capacity {
        warn!(
            "Dropping {} instances over buffer capacity {}",
            instances.len() - capacity,
            capacity
        );
        capacity
    } else {
        instances.len()
    };

    if count > 0 {
        renderer
            .queue
            .write_buffer(buffer, 0, bytemuck::cast_slice(&instances[..count]));
    }
    count as u32
}

fn draw_instances(pass: &mut RenderPass<'_>, mesh: &Mesh, instances: &Buffer, count: u32) {
    if count == 0 {
        return;
    }
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.set_vertex_buffer(1, instances.slice(..));
    pass.draw_indexed(0..mesh.index_count, 0, 0..count);
}
