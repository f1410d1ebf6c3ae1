use crate::lighting::LightRig;
use crate::scene::{BackToFront, SceneRegistry};

use super::{BindError, DrawCall, FrameUniforms, GraphicsBinding, ViewerState};

/// Decides the draw order of a frame.
///
/// Order:
/// 1) opaque drawables, registration order
/// 2) transparent drawables, farthest-first from this frame's eye
///
/// The two groups are never interleaved. Handle validity is the binding's
/// concern, not this type's.
///
/// Buffers are reused across frames; no per-frame allocation once warmed.
#[derive(Debug, Default)]
pub struct FrameRenderer {
    calls: Vec<DrawCall>,
    sorter: BackToFront,
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds this frame's draw sequence.
    pub fn plan(&mut self, registry: &SceneRegistry, viewer: &ViewerState) -> &[DrawCall] {
        self.calls.clear();
        self.calls.extend(registry.opaque().map(DrawCall::from_drawable));

        let order = self.sorter.sort(registry.transparent(), viewer.eye);
        self.calls.extend(
            order
                .iter()
                .filter_map(|&id| registry.get(id))
                .map(DrawCall::from_drawable),
        );

        &self.calls
    }

    /// Plans the frame and hands it to `binding`. Binding errors are returned
    /// as-is; what to do with a failed frame is the caller's decision.
    pub fn submit<B>(
        &mut self,
        registry: &SceneRegistry,
        viewer: &ViewerState,
        lights: &LightRig,
        time: f32,
        binding: &mut B,
    ) -> Result<(), BindError>
    where
        B: GraphicsBinding + ?Sized,
    {
        let frame = FrameUniforms {
            viewer,
            lights,
            time,
        };
        let calls = self.plan(registry, viewer);
        binding.execute(&frame, calls)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::lighting::{DirectionalLight, LightColor};
    use crate::scene::{
        BlendMode, DrawableDesc, DrawableId, MaterialHandle, MeshHandle, ProgramHandle, Transform,
    };

    /// Records what it was asked to draw.
    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<(DrawableId, BlendMode)>>,
        eyes: Vec<Vec3>,
    }

    impl GraphicsBinding for Recorder {
        fn execute(
            &mut self,
            frame: &FrameUniforms<'_>,
            calls: &[DrawCall],
        ) -> Result<(), BindError> {
            self.eyes.push(frame.viewer.eye);
            self.frames.push(calls.iter().map(|c| (c.id, c.blend)).collect());
            Ok(())
        }
    }

    struct Failing;

    impl GraphicsBinding for Failing {
        fn execute(&mut self, _: &FrameUniforms<'_>, calls: &[DrawCall]) -> Result<(), BindError> {
            Err(BindError::UnknownMesh(calls[0].mesh))
        }
    }

    fn lights() -> LightRig {
        LightRig::new(DirectionalLight {
            direction: Vec3::new(0.0, -4.0, -5.0),
            color: LightColor::grey(0.05, 0.4, 0.5),
        })
    }

    fn at(p: Vec3) -> DrawableDesc {
        DrawableDesc::new(MeshHandle(0), MaterialHandle(0), ProgramHandle(0))
            .with_transform(Transform::from_translation(p))
    }

    /// Opaque and transparent drawables registered interleaved.
    fn mixed_scene() -> SceneRegistry {
        let mut reg = SceneRegistry::new();
        reg.register(at(Vec3::new(-3.0, 0.5, 0.0))).unwrap(); // 0
        reg.register(at(Vec3::new(-0.3, 0.5, 2.0)).transparent()).unwrap(); // 1
        reg.register(at(Vec3::new(1.5, 0.0, 0.5))).unwrap(); // 2
        reg.register(at(Vec3::new(-0.05, 0.4, 1.95)).transparent()).unwrap(); // 3
        reg.register(at(Vec3::new(0.2, 0.3, 1.9)).transparent()).unwrap(); // 4
        reg.register(at(Vec3::new(-3.0, 1.625, -2.525))).unwrap(); // 5
        reg.register(at(Vec3::new(0.45, 0.2, 1.8)).transparent()).unwrap(); // 6
        reg
    }

    fn indices(calls: &[DrawCall]) -> Vec<usize> {
        calls.iter().map(|c| c.id.index()).collect()
    }

    #[test]
    fn opaque_first_in_registration_order_then_sorted_transparent() {
        let reg = mixed_scene();
        let mut fr = FrameRenderer::new();
        let calls = fr.plan(&reg, &ViewerState::at(Vec3::new(0.0, 1.0, 6.0)));
        assert_eq!(indices(calls), vec![0, 2, 5, 6, 4, 3, 1]);
    }

    #[test]
    fn partitions_never_interleave() {
        let reg = mixed_scene();
        let mut fr = FrameRenderer::new();
        for eye in [Vec3::new(0.0, 1.0, 6.0), Vec3::new(0.0, 1.0, 0.0), Vec3::splat(-4.0)] {
            let calls = fr.plan(&reg, &ViewerState::at(eye));
            let first_transparent = calls
                .iter()
                .position(|c| c.blend == BlendMode::Transparent)
                .unwrap();
            assert!(calls[..first_transparent].iter().all(|c| c.blend == BlendMode::Opaque));
            assert!(calls[first_transparent..].iter().all(|c| c.blend == BlendMode::Transparent));
            assert_eq!(calls.len(), reg.len());
        }
    }

    #[test]
    fn each_frame_uses_its_own_eye() {
        let reg = mixed_scene();
        let mut fr = FrameRenderer::new();
        let mut rec = Recorder::default();
        let rig = lights();

        fr.submit(&reg, &ViewerState::at(Vec3::new(0.0, 1.0, 6.0)), &rig, 0.0, &mut rec)
            .unwrap();
        fr.submit(&reg, &ViewerState::at(Vec3::new(0.0, 1.0, 0.0)), &rig, 0.016, &mut rec)
            .unwrap();

        let transparent = |frame: &Vec<(DrawableId, BlendMode)>| {
            frame[3..].iter().map(|(id, _)| id.index()).collect::<Vec<_>>()
        };
        assert_eq!(transparent(&rec.frames[0]), vec![6, 4, 3, 1]);
        assert_eq!(transparent(&rec.frames[1]), vec![1, 3, 4, 6]);
        assert_eq!(rec.eyes, vec![Vec3::new(0.0, 1.0, 6.0), Vec3::new(0.0, 1.0, 0.0)]);
    }

    #[test]
    fn unchanged_eye_gives_identical_order() {
        let reg = mixed_scene();
        let mut fr = FrameRenderer::new();
        let viewer = ViewerState::at(Vec3::new(0.7, 1.3, 4.0));
        let first = indices(fr.plan(&reg, &viewer));
        let second = indices(fr.plan(&reg, &viewer));
        assert_eq!(first, second);
    }

    #[test]
    fn transform_updates_show_up_in_the_next_plan() {
        let mut reg = mixed_scene();
        let mut fr = FrameRenderer::new();
        let viewer = ViewerState::at(Vec3::new(0.0, 1.0, 6.0));

        // Push the nearest step far behind the others.
        let moved = Transform::from_translation(Vec3::new(-0.3, 0.5, -20.0));
        reg.update_transform(DrawableId::new(1), moved).unwrap();

        let calls = fr.plan(&reg, &viewer);
        assert_eq!(calls[3].id.index(), 1);
        assert_eq!(calls[3].model, moved.matrix());
    }

    #[test]
    fn opaque_only_scene_has_no_transparent_tail() {
        let mut reg = SceneRegistry::new();
        reg.register(at(Vec3::ZERO)).unwrap();
        let mut fr = FrameRenderer::new();
        assert_eq!(indices(fr.plan(&reg, &ViewerState::at(Vec3::ONE))), vec![0]);
    }

    #[test]
    fn binding_errors_propagate() {
        let reg = mixed_scene();
        let mut fr = FrameRenderer::new();
        let err = fr
            .submit(&reg, &ViewerState::at(Vec3::ZERO), &lights(), 0.0, &mut Failing)
            .unwrap_err();
        assert_eq!(err, BindError::UnknownMesh(MeshHandle(0)));
    }
}
