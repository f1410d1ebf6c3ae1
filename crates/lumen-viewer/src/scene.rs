//! The interior scene: two platforms, four walls, a glass staircase, a lamp
//! and two bobbing light markers.

use std::f32::consts::FRAC_PI_2;

use anyhow::Result;
use glam::{Quat, Vec3};

use lumen_engine::assets::{AssetStore, MaterialDesc, MeshData, ShadingModel, TextureData};
use lumen_engine::camera::FlyCamera;
use lumen_engine::lighting::{
    Attenuation, DirectionalLight, LightColor, LightRig, PointLight, SpotLight,
};
use lumen_engine::scene::{
    DrawableDesc, DrawableId, MaterialHandle, MeshHandle, ProgramHandle, RegistryError,
    SceneRegistry, Transform,
};

use crate::animate::Bob;

const PLATFORM_SCALE: Vec3 = Vec3::new(5.0, 0.15, 5.2);

/// (position, yaw degrees, scale, uses the brick material)
const WALLS: [(Vec3, f32, Vec3, bool); 4] = [
    (Vec3::new(-3.0, 1.625, -2.525), 0.0, Vec3::new(5.0, 2.1, 0.15), true),
    (Vec3::new(-5.425, 1.625, -1.2), 90.0, Vec3::new(2.5, 2.1, 0.15), true),
    (Vec3::new(2.5, 1.125, -2.025), 0.0, Vec3::new(3.0, 2.1, 0.15), false),
    (Vec3::new(3.925, 1.125, 0.05), 90.0, Vec3::new(4.0, 2.1, 0.15), false),
];

/// Glass step centres, highest first.
pub const STAIR_ANCHORS: [Vec3; 4] = [
    Vec3::new(-0.3, 0.5, 2.0),
    Vec3::new(-0.05, 0.4, 1.95),
    Vec3::new(0.2, 0.3, 1.9),
    Vec3::new(0.45, 0.2, 1.8),
];

const STEP_SIZE: Vec3 = Vec3::new(0.25, 0.6, 1.0);

const LAMP_POSITION: Vec3 = Vec3::new(3.2, 0.075, -1.4);
const MARKER_SCALE: f32 = 0.1;

/// A light marker cube and the point light it carries.
#[derive(Debug, Clone)]
pub struct Marker {
    pub drawable: DrawableId,
    pub light: usize,
    pub bob: Bob,
}

/// Everything the viewer draws and lights.
pub struct InteriorScene {
    pub assets: AssetStore,
    pub registry: SceneRegistry,
    pub lights: LightRig,
    pub markers: Vec<Marker>,
}

struct Programs {
    lit: ProgramHandle,
    emissive: ProgramHandle,
}

impl InteriorScene {
    pub fn build(mut assets: AssetStore) -> Result<Self> {
        let programs = Programs {
            lit: assets.add_program(ShadingModel::Lit)?,
            emissive: assets.add_program(ShadingModel::Emissive)?,
        };

        let cube_tiled = assets.add_mesh(MeshData::cube(4.0))?;
        let cube_wall = assets.add_mesh(MeshData::cube(2.0))?;
        let cube = assets.add_mesh(MeshData::cube(1.0))?;
        let quad = assets.add_mesh(MeshData::quad())?;

        let mut registry = SceneRegistry::new();
        let mut lights = LightRig::new(DirectionalLight {
            direction: Vec3::new(0.0, -4.0, -5.0),
            color: LightColor::grey(0.05, 0.4, 0.5),
        });

        // Platforms.
        let wood = textured(
            &mut assets,
            "WoodFlooringAshSuperWhite_diffuse.jpg",
            "WoodFlooringAshSuperWhite_specular.jpg",
            [181, 150, 110, 255],
        )?;
        let tiles = textured(
            &mut assets,
            "TilesBlackSlateSquare_diffuse.png",
            "TilesBlackSlateSquare_specular.png",
            [60, 62, 66, 255],
        )?;

        let platforms = [(Vec3::new(-3.0, 0.5, 0.0), wood), (Vec3::new(1.5, 0.0, 0.5), tiles)];
        for (position, material) in platforms {
            registry.register(
                DrawableDesc::new(cube_tiled, material, programs.lit)
                    .with_transform(
                        Transform::from_translation(position).with_scale(PLATFORM_SCALE),
                    )
                    .cull_back_faces(),
            )?;
        }

        // Walls.
        let bricks = textured(
            &mut assets,
            "BricksReclaimedWhitewashedOffset_diffuse.png",
            "BricksReclaimedWhitewashedOffset_specular.png",
            [205, 200, 190, 255],
        )?;
        let stucco = textured(
            &mut assets,
            "StuccoRoughCast2_diffuse.png",
            "StuccoRoughCast_specular.png",
            [220, 214, 200, 255],
        )?;

        for (position, yaw, scale, brick) in WALLS {
            let material = if brick { bricks } else { stucco };
            registry.register(
                DrawableDesc::new(cube_wall, material, programs.lit)
                    .with_transform(
                        Transform::from_translation(position)
                            .with_yaw_degrees(yaw)
                            .with_scale(scale),
                    )
                    .cull_back_faces(),
            )?;
        }

        add_lamp(&mut assets, &mut registry, &mut lights, &programs, cube)?;
        let markers = add_markers(&mut assets, &mut registry, &mut lights, &programs, cube)?;
        add_staircase(&mut assets, &mut registry, &programs, quad)?;

        lights.spot = Some(SpotLight {
            position: Vec3::ZERO,
            direction: Vec3::NEG_Z,
            color: LightColor::grey(0.0, 1.0, 1.0),
            attenuation: Attenuation::RANGE_50,
            inner_cutoff_deg: 12.5,
            outer_cutoff_deg: 15.0,
            enabled: true,
        });

        log::info!(
            "scene registered: {} drawables ({} opaque, {} transparent), {} point lights",
            registry.len(),
            registry.opaque_len(),
            registry.transparent_len(),
            lights.points.len()
        );

        Ok(Self {
            assets,
            registry,
            lights,
            markers,
        })
    }

    /// Moves every marker and its light to where its bob puts it at `elapsed`.
    pub fn animate(&mut self, elapsed: f32) -> Result<(), RegistryError> {
        for marker in &self.markers {
            let position = marker.bob.position(elapsed);
            self.registry.update_transform(
                marker.drawable,
                Transform::from_translation(position).with_scale(Vec3::splat(MARKER_SCALE)),
            )?;
            if let Some(light) = self.lights.point_mut(marker.light) {
                light.position = position;
            }
        }
        Ok(())
    }

    /// Points the flashlight along the camera's view.
    pub fn aim_flashlight(&mut self, camera: &FlyCamera) {
        if let Some(spot) = self.lights.spot.as_mut() {
            spot.aim(camera.position(), camera.front());
        }
    }

    /// Flips the flashlight and returns its new state.
    pub fn toggle_flashlight(&mut self) -> bool {
        match self.lights.spot.as_mut() {
            Some(spot) => {
                spot.enabled = !spot.enabled;
                spot.enabled
            }
            None => false,
        }
    }
}

/// Material from a diffuse/specular pair under `textures/`. Missing files
/// fall back to a checkerboard of `base` and a flat mid-grey specular map.
fn textured(
    assets: &mut AssetStore,
    diffuse: &str,
    specular: &str,
    base: [u8; 4],
) -> Result<MaterialHandle> {
    let shade = [base[0] / 2 + 20, base[1] / 2 + 20, base[2] / 2 + 20, 255];
    let diffuse = assets.texture_or_else(format!("textures/{diffuse}"), || {
        TextureData::checker(64, 8, base, shade)
    });
    let specular = assets.texture_or_else(format!("textures/{specular}"), || {
        TextureData::solid([128, 128, 128, 255])
    });

    Ok(assets.add_material(MaterialDesc::new(diffuse, specular))?)
}

fn flat(assets: &mut AssetStore, rgb: [f32; 3]) -> Result<MaterialHandle> {
    Ok(assets.add_material(MaterialDesc::flat(rgb))?)
}

/// Standing lamp on the tiled platform: base, pole and shade are lit boxes,
/// the bulb is emissive and carries a short-range point light.
fn add_lamp(
    assets: &mut AssetStore,
    registry: &mut SceneRegistry,
    lights: &mut LightRig,
    programs: &Programs,
    cube: MeshHandle,
) -> Result<()> {
    let metal = assets.add_material(
        MaterialDesc::new(
            TextureData::solid([40, 40, 44, 255]),
            TextureData::solid([200, 200, 200, 255]),
        )
        .with_shininess(64.0),
    )?;
    let fabric = assets.add_material(MaterialDesc::new(
        TextureData::solid([235, 222, 190, 255]),
        TextureData::solid([20, 20, 20, 255]),
    ))?;
    let warm = Vec3::new(1.0, 0.85, 0.6);
    let bulb = flat(assets, warm.to_array())?;

    let parts = [
        (metal, Vec3::new(0.0, 0.05, 0.0), Vec3::new(0.4, 0.1, 0.4)),
        (metal, Vec3::new(0.0, 0.7, 0.0), Vec3::new(0.06, 1.2, 0.06)),
        (fabric, Vec3::new(0.0, 1.4, 0.0), Vec3::new(0.45, 0.3, 0.45)),
    ];
    for (material, offset, scale) in parts {
        registry.register(
            DrawableDesc::new(cube, material, programs.lit).with_transform(
                Transform::from_translation(LAMP_POSITION + offset).with_scale(scale),
            ),
        )?;
    }

    let bulb_position = LAMP_POSITION + Vec3::new(0.0, 1.22, 0.0);
    registry.register(
        DrawableDesc::new(cube, bulb, programs.emissive).with_transform(
            Transform::from_translation(bulb_position).with_scale(Vec3::splat(0.12)),
        ),
    )?;

    lights.add_point(PointLight {
        position: bulb_position,
        color: LightColor::grey(0.05, 0.8, 1.0).tinted(warm),
        attenuation: Attenuation::RANGE_13,
    });

    Ok(())
}

fn add_markers(
    assets: &mut AssetStore,
    registry: &mut SceneRegistry,
    lights: &mut LightRig,
    programs: &Programs,
    cube: MeshHandle,
) -> Result<Vec<Marker>> {
    let specs = [
        (Vec3::new(-3.0, 1.4, 0.5), Vec3::new(1.0, 0.55, 0.35), 0.0),
        (Vec3::new(0.8, 1.1, 1.5), Vec3::new(0.4, 0.6, 1.0), FRAC_PI_2),
    ];

    let mut markers = Vec::with_capacity(specs.len());
    for (base, color, phase) in specs {
        let material = flat(assets, color.to_array())?;
        let drawable = registry.register(
            DrawableDesc::new(cube, material, programs.emissive).with_transform(
                Transform::from_translation(base).with_scale(Vec3::splat(MARKER_SCALE)),
            ),
        )?;
        let light = lights.add_point(PointLight {
            position: base,
            color: LightColor::grey(0.05, 0.8, 1.0).tinted(color),
            attenuation: Attenuation::RANGE_13,
        });

        markers.push(Marker {
            drawable,
            light,
            bob: Bob {
                base,
                amplitude: 0.15,
                frequency: 0.4,
                phase,
            },
        });
    }

    Ok(markers)
}

/// Four translucent steps laid flat, descending from the wooden platform.
fn add_staircase(
    assets: &mut AssetStore,
    registry: &mut SceneRegistry,
    programs: &Programs,
    quad: MeshHandle,
) -> Result<()> {
    let glass = assets.add_material(
        MaterialDesc::new(
            TextureData::solid([190, 225, 240, 255]),
            TextureData::solid([255; 4]),
        )
        .with_tint([1.0, 1.0, 1.0, 0.45])
        .with_shininess(128.0),
    )?;

    let flat_x = Quat::from_rotation_x(-FRAC_PI_2);
    for anchor in STAIR_ANCHORS {
        registry.register(
            DrawableDesc::new(quad, glass, programs.lit)
                .with_transform(
                    Transform::from_translation(anchor)
                        .with_rotation(flat_x)
                        .with_scale(STEP_SIZE),
                )
                .transparent(),
        )?;
    }

    Ok(())
}
