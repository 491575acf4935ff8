use super::helpers;
use glam::Mat4;
use portfolio_core::color::srgb_hex;
use portfolio_core::{
    Camera, ParticleField, StarField, NEBULA_COLOR, NEBULA_OPACITY, NEBULA_POINT_SIZE,
    STAR_WORLD_SIZE_PER_UNIT,
};
use wgpu::util::DeviceExt;

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![1 => Float32x3, 2 => Float32, 3 => Float32x4];

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PointUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    cam_right: [f32; 4],
    cam_up: [f32; 4],
    tint: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PointInstance {
    center: [f32; 3],
    size: f32,
    color: [f32; 4],
}

/// One static batch of billboards with its own uniforms.
struct PointCloud {
    instance_buffer: wgpu::Buffer,
    count: u32,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    tint: [f32; 4],
}

impl PointCloud {
    fn new(
        device: &wgpu::Device,
        bgl: &wgpu::BindGroupLayout,
        label: &str,
        instances: &[PointInstance],
        tint: [f32; 4],
    ) -> Self {
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(instances),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let uniform_buffer = helpers::uniform_buffer::<PointUniforms>(device, label);
        let bind_group = helpers::uniform_bind_group(device, label, bgl, &uniform_buffer);
        Self {
            instance_buffer,
            count: instances.len() as u32,
            uniform_buffer,
            bind_group,
            tint,
        }
    }

    fn write(&self, queue: &wgpu::Queue, camera: &Camera, model: Mat4, size_scale: f32) {
        let (right, up) = camera.basis();
        let u = PointUniforms {
            view_proj: camera.view_proj().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            cam_right: right.extend(0.0).to_array(),
            cam_up: up.extend(0.0).to_array(),
            tint: self.tint,
            params: [size_scale, 0.0, 0.0, 0.0],
        };
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));
    }
}

pub(crate) struct PointsResources {
    pipeline: wgpu::RenderPipeline,
    quad_vb: wgpu::Buffer,
    stars: PointCloud,
    nebula: PointCloud,
}

pub(crate) fn create_points_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    stars: &StarField,
    nebula: &ParticleField,
) -> PointsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(portfolio_core::POINTS_WGSL.into()),
    });
    let bgl = helpers::uniform_layout(device, "points_bgl", wgpu::ShaderStages::VERTEX_FRAGMENT);
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("points_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    // Quad vertex buffer (two triangles)
    let quad_vertices: [f32; 12] = [
        -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
    ];
    let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("quad_vb"),
        contents: bytemuck::cast_slice(&quad_vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let vertex_buffers = [
        // slot 0: quad corners
        wgpu::VertexBufferLayout {
            array_stride: (std::mem::size_of::<f32>() * 2) as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x2,
                offset: 0,
                shader_location: 0,
            }],
        },
        // slot 1: per-point data
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ];
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("points_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_points"),
            buffers: &vertex_buffers,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        // Tested against the meshes but never occluding each other
        depth_stencil: Some(wgpu::DepthStencilState {
            format: helpers::DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_points"),
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

    let star_instances = stars
        .positions
        .iter()
        .zip(&stars.colors)
        .zip(&stars.sizes)
        .map(|((p, c), s)| PointInstance {
            center: *p,
            size: s * STAR_WORLD_SIZE_PER_UNIT,
            color: [c[0], c[1], c[2], 1.0],
        })
        .collect::<Vec<_>>();
    let nebula_instances = nebula
        .points()
        .map(|p| PointInstance {
            center: p,
            size: NEBULA_POINT_SIZE,
            color: [1.0; 4],
        })
        .collect::<Vec<_>>();
    let [r, g, b] = srgb_hex(NEBULA_COLOR);

    PointsResources {
        stars: PointCloud::new(device, &bgl, "stars", &star_instances, [1.0; 4]),
        nebula: PointCloud::new(
            device,
            &bgl,
            "nebula",
            &nebula_instances,
            [r, g, b, NEBULA_OPACITY],
        ),
        pipeline,
        quad_vb,
    }
}

impl PointsResources {
    pub(crate) fn prepare(
        &self,
        queue: &wgpu::Queue,
        camera: &Camera,
        nebula_rotation_y: f32,
        star_scale: f32,
    ) {
        self.stars.write(queue, camera, Mat4::IDENTITY, star_scale);
        self.nebula
            .write(queue, camera, Mat4::from_rotation_y(nebula_rotation_y), 1.0);
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
        for cloud in [&self.stars, &self.nebula] {
            if cloud.count == 0 {
                continue;
            }
            rpass.set_bind_group(0, &cloud.bind_group, &[]);
            rpass.set_vertex_buffer(1, cloud.instance_buffer.slice(..));
            rpass.draw(0..6, 0..cloud.count);
        }
    }
}
