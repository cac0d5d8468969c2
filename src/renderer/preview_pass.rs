//! The single render pass: clear to transparent, draw the distorted plane.

use wgpu::util::DeviceExt;

use super::plane::{plane_vertex_buffer_layout, PlaneGeometry, PlaneMesh};
use crate::gpu::pipeline_helpers::{
    create_mesh_pipeline, filtering_sampler, linear_sampler, texture_2d,
    uniform_buffer,
};
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::{ImageTexture, RenderTarget};
use crate::gpu::uniforms::PreviewUniform;
use crate::images::DecodedImage;
use crate::options::PlaneOptions;

/// An uploaded image together with the bind group that samples it.
pub struct BoundImage {
    /// The uploaded texture.
    pub texture: ImageTexture,
    /// Group 1 bind group (texture + sampler).
    pub bind_group: wgpu::BindGroup,
}

/// Pipeline, plane mesh and uniform buffer for the hover preview.
pub struct PreviewRenderer {
    pipeline: wgpu::RenderPipeline,
    mesh: PlaneMesh,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    image_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    /// Shown while the active slot is empty.
    placeholder: BoundImage,
    msaa: Option<RenderTarget>,
    sample_count: u32,
    format: wgpu::TextureFormat,
}

impl PreviewRenderer {
    /// Build the pipeline for the context's surface format.
    pub fn new(
        context: &RenderContext,
        plane: &PlaneOptions,
        sample_count: u32,
    ) -> Self {
        let device = &context.device;
        let format = context.format();

        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/preview.wgsl"
        ));

        let uniform_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Preview Uniform Layout"),
                entries: &[uniform_buffer(0)],
            });
        let image_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Preview Image Layout"),
                entries: &[texture_2d(0), filtering_sampler(1)],
            });

        let uniform_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Preview Uniform Buffer"),
                contents: bytemuck::bytes_of(&PreviewUniform::default()),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let uniform_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Preview Uniform Bind Group"),
                layout: &uniform_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                }],
            });

        let pipeline = create_mesh_pipeline(
            device,
            "Preview",
            &shader,
            plane_vertex_buffer_layout(),
            format,
            Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
            sample_count,
            &[&uniform_layout, &image_layout],
        );

        let geometry = PlaneGeometry::new(plane.segments_x, plane.segments_y);
        let mesh = PlaneMesh::new(device, &geometry);
        let sampler = linear_sampler(device, "Preview Image Sampler");

        let placeholder = Self::bind_image_with(
            device,
            &context.queue,
            &image_layout,
            &sampler,
            &DecodedImage::transparent(),
            "Preview Placeholder",
        );

        let msaa = (sample_count > 1).then(|| {
            RenderTarget::new(device, context.size(), format, sample_count)
        });

        Self {
            pipeline,
            mesh,
            uniform_buffer,
            uniform_bind_group,
            image_layout,
            sampler,
            placeholder,
            msaa,
            sample_count,
            format,
        }
    }

    fn bind_image_with(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        image: &DecodedImage,
        label: &str,
    ) -> BoundImage {
        let texture = ImageTexture::upload(device, queue, image, label);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} Bind Group")),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        BoundImage {
            texture,
            bind_group,
        }
    }

    /// Upload a decoded image and create its bind group.
    pub fn bind_image(
        &self,
        context: &RenderContext,
        image: &DecodedImage,
        index: usize,
    ) -> BoundImage {
        Self::bind_image_with(
            &context.device,
            &context.queue,
            &self.image_layout,
            &self.sampler,
            image,
            &format!("Preview Image {index}"),
        )
    }

    /// Recreate the MSAA target for a new surface size.
    pub fn resize(&mut self, device: &wgpu::Device, size: (u32, u32)) {
        if self.sample_count > 1 {
            self.msaa = Some(RenderTarget::new(
                device,
                size,
                self.format,
                self.sample_count,
            ));
        }
    }

    /// Write this frame's uniforms.
    pub fn write_uniforms(&self, queue: &wgpu::Queue, uniform: &PreviewUniform) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniform));
    }

    /// Record the preview pass into `encoder`, targeting `output`. `image`
    /// is the active slot's bind group; `None` draws the transparent
    /// placeholder.
    pub fn draw(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        output: &wgpu::TextureView,
        image: Option<&BoundImage>,
    ) {
        let (view, resolve_target) = match &self.msaa {
            Some(target) => (&target.view, Some(output)),
            None => (output, None),
        };
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Preview Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: if self.msaa.is_some() {
                        wgpu::StoreOp::Discard
                    } else {
                        wgpu::StoreOp::Store
                    },
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });

        let image = image.unwrap_or(&self.placeholder);
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.uniform_bind_group, &[]);
        pass.set_bind_group(1, &image.bind_group, &[]);
        pass.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(
            self.mesh.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        pass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
    }
}
