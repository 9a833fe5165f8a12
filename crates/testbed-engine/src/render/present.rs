use std::ops::Range;

use crate::coords::ColorRgba;
use crate::device::Gpu;

use super::projection::ProjectionUniform;
use super::{FrameSlot, PresentError, SlotLease, Topology, Vertex};

/// Receives the draw calls of one frame, in recording order.
///
/// The GPU presenter implements this over a render pass; tests implement it
/// with a recorder.
pub trait DrawSink {
    fn draw(&mut self, topology: Topology, vertices: Range<u32>);
}

/// Walks the slot's command list in FIFO order, one draw per command.
pub fn encode_commands<S: DrawSink + ?Sized>(slot: &FrameSlot, sink: &mut S) {
    for cmd in slot.commands() {
        sink.draw(cmd.topology(), cmd.range());
    }
}

/// Pipelines for each supported topology, built for one surface format.
struct PipelineSet {
    format: wgpu::TextureFormat,
    pipelines: [wgpu::RenderPipeline; 3],
}

impl PipelineSet {
    fn new(
        device: &wgpu::Device,
        bind_group_layout: &wgpu::BindGroupLayout,
        format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("testbed debug-draw shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/debug_draw.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("testbed debug-draw pipeline layout"),
            bind_group_layouts: &[bind_group_layout],
            immediate_size: 0,
        });

        let pipelines = Topology::ALL.map(|topology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("testbed debug-draw pipeline"),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: topology.to_wgpu(),
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        });

        Self { format, pipelines }
    }

    #[inline]
    fn get(&self, topology: Topology) -> &wgpu::RenderPipeline {
        &self.pipelines[topology.index()]
    }
}

/// GPU storage mirroring one frame slot.
struct SlotBuffers {
    vertex_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

/// Render-pass sink; rebinds the pipeline only when the topology changes.
struct PassSink<'p, 'e> {
    pass: &'p mut wgpu::RenderPass<'e>,
    pipelines: &'p PipelineSet,
    bound: Option<Topology>,
}

impl DrawSink for PassSink<'_, '_> {
    fn draw(&mut self, topology: Topology, vertices: Range<u32>) {
        if self.bound != Some(topology) {
            self.pass.set_pipeline(self.pipelines.get(topology));
            self.bound = Some(topology);
        }
        self.pass.draw(vertices, 0..1);
    }
}

/// Uploads a filled slot and replays its command list into the drawable.
///
/// Owns one vertex buffer and one uniform buffer per slot, so a slot's GPU
/// storage is only rewritten once the flow controller hands that slot out again.
pub struct Presenter {
    clear_color: wgpu::Color,
    bind_group_layout: wgpu::BindGroupLayout,
    pipelines: PipelineSet,
    buffers: Vec<SlotBuffers>,
}

impl Presenter {
    pub fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        slots: usize,
        max_vertices: usize,
        clear_color: ColorRgba,
    ) -> Self {
        let uniform_size = std::mem::size_of::<ProjectionUniform>() as u64;

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("testbed debug-draw bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(uniform_size),
                },
                count: None,
            }],
        });

        let vertex_bytes = (max_vertices.max(1) * std::mem::size_of::<Vertex>()) as u64;
        let buffers = (0..slots)
            .map(|_| {
                let vertex_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("testbed slot vbo"),
                    size: vertex_bytes,
                    usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
                    label: Some("testbed slot projection ubo"),
                    size: uniform_size,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                    mapped_at_creation: false,
                });
                let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("testbed slot bind group"),
                    layout: &bind_group_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: uniform_buffer.as_entire_binding(),
                    }],
                });
                SlotBuffers {
                    vertex_buffer,
                    uniform_buffer,
                    bind_group,
                }
            })
            .collect();

        let pipelines = PipelineSet::new(device, &bind_group_layout, format);

        Self {
            clear_color: to_wgpu_color(clear_color),
            bind_group_layout,
            pipelines,
            buffers,
        }
    }

    /// Presents a filled slot.
    ///
    /// On success the slot's release is registered as the submission's
    /// completion callback. If no drawable is available the frame is skipped and
    /// the slot is released immediately.
    pub fn present(&mut self, gpu: &Gpu<'_>, lease: SlotLease<'_>) -> Result<(), PresentError> {
        if self.pipelines.format != gpu.surface_format() {
            log::debug!(
                "surface format changed to {:?}; rebuilding pipelines",
                gpu.surface_format()
            );
            self.pipelines =
                PipelineSet::new(gpu.device(), &self.bind_group_layout, gpu.surface_format());
        }

        let (slot, release) = lease.into_parts();

        // `release` drops on the error path, which frees the slot.
        let mut frame = gpu.begin_frame()?;

        let buffers = &self.buffers[slot.id()];
        if !slot.vertices().is_empty() {
            gpu.queue()
                .write_buffer(&buffers.vertex_buffer, 0, bytemuck::cast_slice(slot.vertices()));
        }
        gpu.queue().write_buffer(
            &buffers.uniform_buffer,
            0,
            bytemuck::bytes_of(&slot.projection().uniform()),
        );

        {
            let mut pass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("testbed debug-draw pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            pass.set_bind_group(0, &buffers.bind_group, &[]);
            pass.set_vertex_buffer(0, buffers.vertex_buffer.slice(..));

            let mut sink = PassSink {
                pass: &mut pass,
                pipelines: &self.pipelines,
                bound: None,
            };
            encode_commands(slot, &mut sink);
        }

        gpu.submit(frame, move || release.release());
        Ok(())
    }
}

fn to_wgpu_color(c: ColorRgba) -> wgpu::Color {
    wgpu::Color {
        r: f64::from(c.r),
        g: f64::from(c.g),
        b: f64::from(c.b),
        a: f64::from(c.a),
    }
}
