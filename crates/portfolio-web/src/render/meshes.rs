use super::helpers;
use portfolio_core::mesh::{Shape, Vertex};
use portfolio_core::{Camera, DrawItem, Lighting};
use wgpu::util::DeviceExt;

// Opaque shapes first; the ring is the only translucent primitive.
const DRAW_ORDER: [Shape; 4] = [Shape::Box, Shape::Sphere, Shape::Icosahedron, Shape::Ring];
const INITIAL_INSTANCE_CAPACITY: usize = 64;

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 7] = wgpu::vertex_attr_array![
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4,
    7 => Float32x4,
    8 => Float32x4,
];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    ambient: [f32; 4],
    dir_light: [f32; 4],
    point_light_pos: [f32; 4],
    point_light_color: [f32; 4],
}

impl Globals {
    pub(crate) fn new(camera: &Camera, lighting: &Lighting) -> Self {
        let dir = lighting.directional_pos.normalize_or_zero();
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            ambient: [lighting.ambient, lighting.ambient, lighting.ambient, 1.0],
            dir_light: [dir.x, dir.y, dir.z, lighting.directional_intensity],
            point_light_pos: lighting.point_pos.extend(lighting.point_intensity).to_array(),
            point_light_color: [
                lighting.point_color[0],
                lighting.point_color[1],
                lighting.point_color[2],
                1.0,
            ],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    emissive: [f32; 4],
    surface: [f32; 4],
}

impl From<&DrawItem> for InstanceRaw {
    fn from(item: &DrawItem) -> Self {
        let m = &item.material;
        let e = m.emissive_intensity;
        Self {
            model: item.model.to_cols_array_2d(),
            color: [m.color[0], m.color[1], m.color[2], m.opacity],
            emissive: [m.emissive[0] * e, m.emissive[1] * e, m.emissive[2] * e, 0.0],
            surface: [m.roughness, m.metalness, 0.0, 0.0],
        }
    }
}

struct GpuMesh {
    shape: Shape,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
    capacity: usize,
    instances: u32,
}

pub(crate) struct MeshResources {
    pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    meshes: Vec<GpuMesh>,
    batches: Vec<Vec<InstanceRaw>>,
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("mesh_instances"),
        size: (std::mem::size_of::<InstanceRaw>() * capacity) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(crate) fn create_mesh_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> MeshResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(portfolio_core::SCENE_WGSL.into()),
    });
    let bgl = helpers::uniform_layout(device, "scene_bgl", wgpu::ShaderStages::VERTEX_FRAGMENT);
    let globals_buffer = helpers::uniform_buffer::<Globals>(device, "scene_globals");
    let bind_group = helpers::uniform_bind_group(device, "scene_bg", &bgl, &globals_buffer);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let vertex_buffers = [
        // slot 0: mesh vertices
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRS,
        },
        // slot 1: per-part instance data
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ];
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let meshes = DRAW_ORDER
        .iter()
        .map(|&shape| {
            let data = shape.mesh();
            GpuMesh {
                shape,
                vertex_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh_vb"),
                    contents: bytemuck::cast_slice(&data.vertices),
                    usage: wgpu::BufferUsages::VERTEX,
                }),
                index_buffer: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("mesh_ib"),
                    contents: bytemuck::cast_slice(&data.indices),
                    usage: wgpu::BufferUsages::INDEX,
                }),
                index_count: data.indices.len() as u32,
                instance_buffer: create_instance_buffer(device, INITIAL_INSTANCE_CAPACITY),
                capacity: INITIAL_INSTANCE_CAPACITY,
                instances: 0,
            }
        })
        .collect::<Vec<_>>();

    MeshResources {
        pipeline,
        globals_buffer,
        bind_group,
        batches: vec![Vec::new(); Shape::ALL.len()],
        meshes,
    }
}

impl MeshResources {
    /// Upload globals and regroup this frame's draws into per-shape instance buffers.
    pub(crate) fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        globals: &Globals,
        draws: &[DrawItem],
    ) {
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(globals));
        for batch in &mut self.batches {
            batch.clear();
        }
        for item in draws {
            self.batches[item.shape.index()].push(InstanceRaw::from(item));
        }
        for mesh in &mut self.meshes {
            let batch = &self.batches[mesh.shape.index()];
            if batch.len() > mesh.capacity {
                mesh.capacity = batch.len().next_power_of_two();
                mesh.instance_buffer = create_instance_buffer(device, mesh.capacity);
                log::debug!("[gpu] grew {:?} instances to {}", mesh.shape, mesh.capacity);
            }
            if !batch.is_empty() {
                queue.write_buffer(&mesh.instance_buffer, 0, bytemuck::cast_slice(batch));
            }
            mesh.instances = batch.len() as u32;
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        for mesh in self.meshes.iter().filter(|m| m.instances > 0) {
            rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            rpass.set_vertex_buffer(1, mesh.instance_buffer.slice(..));
            rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..mesh.index_count, 0, 0..mesh.instances);
        }
    }
}
