use super::batch::TextureSlot;
use crate::assets::ImageRegistry;
use cards_core::TextureId;
use wgpu::util::DeviceExt;

const IMAGE_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// GPU copies of the decoded card images, one bind group per `TextureId`,
/// plus a plain white texture for solid-color quads.
pub struct CardTextures {
    layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    plain: wgpu::BindGroup,
    images: Vec<wgpu::BindGroup>,
}

impl CardTextures {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("card_texture_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("card_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let white = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some("plain_texture"),
                size: wgpu::Extent3d {
                    width: 1,
                    height: 1,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: IMAGE_FORMAT,
                usage: wgpu::TextureUsages::TEXTURE_BINDING,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            &[255, 255, 255, 255],
        );
        let plain = bind_texture(device, &layout, &sampler, &white, "plain_texture_bg");
        Self {
            layout,
            sampler,
            plain,
            images: Vec::new(),
        }
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Images already on the GPU; ids below this count are drawable.
    pub fn uploaded(&self) -> usize {
        self.images.len()
    }

    /// Upload registry images that arrived since the last call.
    pub fn sync(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, registry: &ImageRegistry) {
        while self.images.len() < registry.len() {
            let id = TextureId(self.images.len() as u32);
            let bind_group = match registry.get(id) {
                Some(img) => self.upload(device, queue, img, id),
                None => self.plain.clone(),
            };
            self.images.push(bind_group);
        }
    }

    fn upload(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        img: web_sys::HtmlImageElement,
        id: TextureId,
    ) -> wgpu::BindGroup {
        let (width, height) = (img.natural_width(), img.natural_height());
        if width == 0 || height == 0 {
            log::warn!("[gpu] texture {} has no pixels; drawing it plain", id.0);
            return self.plain.clone();
        }
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("card_image"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: IMAGE_FORMAT,
            usage: wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::HTMLImageElement(img),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            size,
        );
        log::debug!("[gpu] texture {} uploaded {}x{}", id.0, width, height);
        bind_texture(device, &self.layout, &self.sampler, &texture, "card_image_bg")
    }

    pub fn bind_group(&self, slot: TextureSlot) -> &wgpu::BindGroup {
        match slot {
            TextureSlot::Plain => &self.plain,
            TextureSlot::Image(id) => self.images.get(id.0 as usize).unwrap_or(&self.plain),
        }
    }
}

fn bind_texture(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    texture: &wgpu::Texture,
    label: &str,
) -> wgpu::BindGroup {
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}
