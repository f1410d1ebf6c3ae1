use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::assets::{AssetStore, ShadingModel};
use crate::frame::{BindError, DrawCall, FrameUniforms, GraphicsBinding};
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{MaterialHandle, MeshHandle};

use super::pipeline::{self, Layouts, PipelineKey};
use super::uniform::{aligned_stride, DrawRaw, FrameRaw};
use super::upload::{self, GpuMaterial, GpuMesh};

/// Textured mesh renderer.
///
/// Owns every GPU resource the scene needs. Pipelines, meshes and materials
/// are created lazily the first time a draw references them and cached for
/// the renderer's lifetime.
#[derive(Default)]
pub struct MeshRenderer {
    pipeline_format: Option<(wgpu::TextureFormat, wgpu::TextureFormat)>,
    layouts: Option<Layouts>,
    shaders: HashMap<ShadingModel, wgpu::ShaderModule>,
    pipelines: HashMap<PipelineKey, wgpu::RenderPipeline>,

    sampler: Option<wgpu::Sampler>,

    frame_ubo: Option<wgpu::Buffer>,
    frame_bind_group: Option<wgpu::BindGroup>,

    draw_ubo: Option<wgpu::Buffer>,
    draw_bind_group: Option<wgpu::BindGroup>,
    draw_capacity: usize,
    draw_stride: u64,
    draw_staging: Vec<u8>,

    meshes: HashMap<MeshHandle, GpuMesh>,
    materials: HashMap<MaterialHandle, GpuMaterial>,

    resolved: Vec<PipelineKey>,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_layouts(&mut self, ctx: &RenderCtx<'_>) {
        let formats = (ctx.surface_format, ctx.depth_format);
        if self.pipeline_format == Some(formats) && self.layouts.is_some() {
            return;
        }

        // Formats changed: cached pipelines target the old attachments.
        self.pipelines.clear();
        self.pipeline_format = Some(formats);

        if self.layouts.is_none() {
            self.layouts = Some(Layouts::new(ctx.device));
            self.frame_ubo = None;
            self.frame_bind_group = None;
            self.draw_ubo = None;
            self.draw_bind_group = None;
            self.materials.clear();
        }
    }

    fn ensure_frame_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.frame_bind_group.is_some() && self.frame_ubo.is_some() {
            return;
        }
        let Some(layouts) = self.layouts.as_ref() else { return };

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lumen frame ubo"),
            size: std::mem::size_of::<FrameRaw>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lumen frame bind group"),
            layout: &layouts.frame,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.frame_ubo = Some(ubo);
        self.frame_bind_group = Some(bind_group);
    }

    fn ensure_draw_capacity(&mut self, ctx: &RenderCtx<'_>, draws: usize) {
        if draws <= self.draw_capacity && self.draw_ubo.is_some() {
            return;
        }
        let Some(layouts) = self.layouts.as_ref() else { return };

        let alignment = u64::from(ctx.device.limits().min_uniform_buffer_offset_alignment);
        let stride = aligned_stride(std::mem::size_of::<DrawRaw>() as u64, alignment);
        let capacity = draws.next_power_of_two().max(16);

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lumen draw ubo"),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("lumen draw bind group"),
            layout: &layouts.draw,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &ubo,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<DrawRaw>() as u64),
                }),
            }],
        });

        log::debug!("draw uniform buffer grown to {capacity} slots ({stride} B stride)");

        self.draw_ubo = Some(ubo);
        self.draw_bind_group = Some(bind_group);
        self.draw_capacity = capacity;
        self.draw_stride = stride;
    }

    /// Resolves every handle in `calls`, uploading what is not yet resident.
    ///
    /// Fails before any GPU command is recorded, so a bad handle never
    /// leaves a half-drawn frame.
    fn prepare(
        &mut self,
        ctx: &RenderCtx<'_>,
        assets: &AssetStore,
        calls: &[DrawCall],
    ) -> Result<(), BindError> {
        let Some(layouts) = self.layouts.as_ref() else {
            return Err(BindError::Backend("mesh layouts missing".into()));
        };
        let sampler = self
            .sampler
            .get_or_insert_with(|| upload::create_sampler(ctx.device));

        self.resolved.clear();

        for call in calls {
            let shading = assets
                .program(call.program)
                .ok_or(BindError::UnknownProgram(call.program))?;

            if let Entry::Vacant(slot) = self.meshes.entry(call.mesh) {
                let mesh = assets.mesh(call.mesh).ok_or(BindError::UnknownMesh(call.mesh))?;
                slot.insert(GpuMesh::upload(ctx.device, mesh));
            }

            if let Entry::Vacant(slot) = self.materials.entry(call.material) {
                let material = assets
                    .material(call.material)
                    .ok_or(BindError::UnknownMaterial(call.material))?;
                slot.insert(GpuMaterial::upload(
                    ctx.device,
                    ctx.queue,
                    &layouts.material,
                    sampler,
                    material,
                ));
            }

            let key = PipelineKey {
                shading,
                blend: call.blend,
                cull: call.cull,
            };

            if !self.pipelines.contains_key(&key) {
                let shader = self.shaders.entry(shading).or_insert_with(|| {
                    let (label, src) = pipeline::shader_source(shading);
                    ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
                        label: Some(label),
                        source: wgpu::ShaderSource::Wgsl(src.into()),
                    })
                });
                let created = pipeline::create_pipeline(
                    ctx.device,
                    layouts,
                    shader,
                    key,
                    ctx.surface_format,
                    ctx.depth_format,
                );
                self.pipelines.insert(key, created);
            }

            self.resolved.push(key);
        }

        Ok(())
    }

    fn write_uniforms(&mut self, ctx: &RenderCtx<'_>, frame: &FrameUniforms<'_>, calls: &[DrawCall]) {
        if let Some(ubo) = self.frame_ubo.as_ref() {
            ctx.queue
                .write_buffer(ubo, 0, bytemuck::bytes_of(&FrameRaw::new(frame)));
        }

        if calls.is_empty() {
            return;
        }

        let stride = self.draw_stride as usize;
        self.draw_staging.clear();
        self.draw_staging.resize(stride * calls.len(), 0);

        for (i, call) in calls.iter().enumerate() {
            let (tint, shininess) = self
                .materials
                .get(&call.material)
                .map_or(([1.0; 4], 0.0), |m| (m.tint, m.shininess));
            let raw = DrawRaw::new(call.model, tint, shininess);
            let bytes = bytemuck::bytes_of(&raw);
            self.draw_staging[i * stride..i * stride + bytes.len()].copy_from_slice(bytes);
        }

        if let Some(ubo) = self.draw_ubo.as_ref() {
            ctx.queue.write_buffer(ubo, 0, &self.draw_staging);
        }
    }

    /// Records one pass that clears the target and draws `calls` in order.
    fn record(&self, target: &mut RenderTarget<'_>, calls: &[DrawCall]) -> Result<(), BindError> {
        let missing = |what: &str| BindError::Backend(format!("{what} not prepared"));
        let frame_bg = self.frame_bind_group.as_ref().ok_or_else(|| missing("frame bind group"))?;

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("lumen mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(target.clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if calls.is_empty() {
            return Ok(());
        }

        let draw_bg = self.draw_bind_group.as_ref().ok_or_else(|| missing("draw bind group"))?;
        rpass.set_bind_group(0, frame_bg, &[]);

        let mut bound: Option<PipelineKey> = None;
        for (i, (call, key)) in calls.iter().zip(&self.resolved).enumerate() {
            let (Some(pipeline), Some(mesh), Some(material)) = (
                self.pipelines.get(key),
                self.meshes.get(&call.mesh),
                self.materials.get(&call.material),
            ) else {
                return Err(missing("draw resources"));
            };

            if bound != Some(*key) {
                rpass.set_pipeline(pipeline);
                bound = Some(*key);
            }

            let offset = (i as u64 * self.draw_stride) as u32;
            rpass.set_bind_group(1, draw_bg, &[offset]);
            rpass.set_bind_group(2, &material.bind_group, &[]);
            rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
            rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
        }

        Ok(())
    }
}

/// One frame's binding of a [`MeshRenderer`] to a render target.
///
/// Implements [`GraphicsBinding`]: handles are resolved against the asset
/// store and draws are recorded in exactly the order given.
pub struct MeshPass<'a, 't> {
    renderer: &'a mut MeshRenderer,
    assets: &'a AssetStore,
    ctx: &'a RenderCtx<'a>,
    target: &'a mut RenderTarget<'t>,
}

impl<'a, 't> MeshPass<'a, 't> {
    pub fn new(
        renderer: &'a mut MeshRenderer,
        assets: &'a AssetStore,
        ctx: &'a RenderCtx<'a>,
        target: &'a mut RenderTarget<'t>,
    ) -> Self {
        Self {
            renderer,
            assets,
            ctx,
            target,
        }
    }
}

impl GraphicsBinding for MeshPass<'_, '_> {
    fn execute(&mut self, frame: &FrameUniforms<'_>, calls: &[DrawCall]) -> Result<(), BindError> {
        let ctx = self.ctx;
        let renderer = &mut *self.renderer;

        renderer.ensure_layouts(ctx);
        renderer.ensure_frame_bindings(ctx);
        renderer.ensure_draw_capacity(ctx, calls.len());
        renderer.prepare(ctx, self.assets, calls)?;
        renderer.write_uniforms(ctx, frame, calls);
        renderer.record(self.target, calls)
    }
}
