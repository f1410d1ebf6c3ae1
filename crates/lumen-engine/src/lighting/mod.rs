//! Light descriptions supplied to the renderer once per frame.
//!
//! The scene owns a `LightRig`; the renderer packs it into `LightsRaw` and
//! uploads it once per frame for every program to share.

mod lights;
mod uniform;

pub use lights::{Attenuation, DirectionalLight, LightColor, LightRig, PointLight, SpotLight};
pub use uniform::{
    DirectionalLightRaw, LightsRaw, MAX_POINT_LIGHTS, PointLightRaw, SpotLightRaw,
};
