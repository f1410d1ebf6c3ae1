//! Back-to-front ordering of transparent drawables (painter's algorithm).
//!
//! Distance is plain Euclidean distance from the eye to each drawable's
//! anchor, not view-space depth. For off-axis viewers the two differ; this
//! module deliberately uses the former.

use glam::Vec3;

use super::{DistanceKey, Drawable, DrawableId};

/// Returns `items` ordered farthest-first from `eye`.
///
/// Equal distances keep their input order. Pure: nothing is mutated and the
/// result depends only on the arguments.
pub fn sort_back_to_front<'a, I>(items: I, eye: Vec3) -> Vec<&'a Drawable>
where
    I: IntoIterator<Item = &'a Drawable>,
{
    let mut keyed: Vec<(DistanceKey, &'a Drawable)> = items
        .into_iter()
        .enumerate()
        .map(|(i, d)| (key_for(d, eye, i), d))
        .collect();

    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, d)| d).collect()
}

/// Reusable back-to-front sorter.
///
/// Same ordering as [`sort_back_to_front`], but keeps its buffers between
/// calls so the per-frame sort does not allocate once warmed.
#[derive(Debug, Default)]
pub struct BackToFront {
    keyed: Vec<(DistanceKey, DrawableId)>,
    order: Vec<DrawableId>,
}

impl BackToFront {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts `items` for the given eye position and returns their ids
    /// farthest-first. The returned slice is valid until the next call.
    pub fn sort<'a, I>(&mut self, items: I, eye: Vec3) -> &[DrawableId]
    where
        I: IntoIterator<Item = &'a Drawable>,
    {
        self.keyed.clear();
        self.order.clear();

        self.keyed.extend(
            items
                .into_iter()
                .enumerate()
                .map(|(i, d)| (key_for(d, eye, i), d.id())),
        );

        // Stable ordering is ensured by DistanceKey including input order.
        self.keyed.sort_by(|a, b| a.0.cmp(&b.0));

        self.order.extend(self.keyed.iter().map(|&(_, id)| id));
        &self.order
    }
}

/// NaN distances (non-finite anchors) count as infinitely far, whatever
/// their sign bit.
#[inline]
fn key_for(d: &Drawable, eye: Vec3, index: usize) -> DistanceKey {
    let distance = d.anchor_position().distance(eye);
    let distance = if distance.is_nan() { f32::INFINITY } else { distance };
    DistanceKey::new(distance, index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DrawableDesc, MaterialHandle, MeshHandle, ProgramHandle, Transform};

    fn quad(id: u32, anchor: Vec3) -> Drawable {
        let desc = DrawableDesc::new(MeshHandle(0), MaterialHandle(0), ProgramHandle(0))
            .with_transform(Transform::from_translation(anchor))
            .transparent();
        Drawable::from_desc(DrawableId::new(id), desc)
    }

    fn staircase() -> Vec<Drawable> {
        vec![
            quad(0, Vec3::new(-0.3, 0.5, 2.0)),
            quad(1, Vec3::new(-0.05, 0.4, 1.95)),
            quad(2, Vec3::new(0.2, 0.3, 1.9)),
            quad(3, Vec3::new(0.45, 0.2, 1.8)),
        ]
    }

    fn ids(sorted: &[&Drawable]) -> Vec<u32> {
        sorted.iter().map(|d| d.id().index() as u32).collect()
    }

    fn assert_non_increasing(sorted: &[&Drawable], eye: Vec3) {
        for pair in sorted.windows(2) {
            let a = pair[0].anchor_position().distance(eye);
            let b = pair[1].anchor_position().distance(eye);
            assert!(a >= b, "{a} < {b}: not back-to-front");
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let sorted = sort_back_to_front(std::iter::empty(), Vec3::ZERO);
        assert!(sorted.is_empty());
    }

    #[test]
    fn staircase_from_start_position() {
        let steps = staircase();
        let eye = Vec3::new(0.0, 1.0, 6.0);
        let sorted = sort_back_to_front(&steps, eye);

        // Distances: 4.042, 4.095, 4.164, 4.299; the lowest step is farthest.
        assert_eq!(ids(&sorted), vec![3, 2, 1, 0]);
        for pair in sorted.windows(2) {
            let a = pair[0].anchor_position().distance(eye);
            let b = pair[1].anchor_position().distance(eye);
            assert!(a > b);
        }
    }

    #[test]
    fn moving_eye_reorders_without_stale_state() {
        let steps = staircase();
        let mut sorter = BackToFront::new();

        let far = sorter.sort(&steps, Vec3::new(0.0, 1.0, 6.0)).to_vec();
        let near = sorter.sort(&steps, Vec3::new(0.0, 1.0, 0.0)).to_vec();

        let as_u32 = |v: &[DrawableId]| v.iter().map(|id| id.index() as u32).collect::<Vec<_>>();
        assert_eq!(as_u32(&far), vec![3, 2, 1, 0]);
        assert_eq!(as_u32(&near), vec![0, 1, 2, 3]);
    }

    #[test]
    fn output_is_permutation_of_input() {
        let steps = staircase();
        let eye = Vec3::new(2.0, -1.0, 0.5);
        let mut got = ids(&sort_back_to_front(&steps, eye));
        got.sort_unstable();
        assert_eq!(got, vec![0, 1, 2, 3]);
    }

    #[test]
    fn ordering_holds_for_many_eye_positions() {
        let steps = staircase();
        for x in -3..=3 {
            for z in -3..=6 {
                let eye = Vec3::new(x as f32, 1.0, z as f32);
                assert_non_increasing(&sort_back_to_front(&steps, eye), eye);
            }
        }
    }

    #[test]
    fn equal_distances_keep_input_order() {
        let pair = vec![quad(7, Vec3::ONE), quad(4, Vec3::ONE)];
        let sorted = sort_back_to_front(&pair, Vec3::new(0.0, 1.0, 6.0));
        assert_eq!(ids(&sorted), vec![7, 4]);

        let reversed: Vec<&Drawable> = pair.iter().rev().collect();
        let sorted = sort_back_to_front(reversed, Vec3::new(0.0, 1.0, 6.0));
        assert_eq!(ids(&sorted), vec![4, 7]);
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let mut items = staircase();
        items.push(quad(4, Vec3::new(-0.3, 0.5, 2.0)));
        let eye = Vec3::new(0.0, 1.0, 6.0);

        let mut sorter = BackToFront::new();
        let first = sorter.sort(&items, eye).to_vec();
        let second = sorter.sort(&items, eye).to_vec();
        assert_eq!(first, second);
        assert_eq!(ids(&sort_back_to_front(&items, eye)), ids(&sort_back_to_front(&items, eye)));
    }

    #[test]
    fn eye_on_anchor_sorts_it_last() {
        let steps = staircase();
        let eye = steps[1].anchor_position();
        let sorted = sort_back_to_front(&steps, eye);
        assert_eq!(sorted.last().map(|d| d.id().index()), Some(1));
    }

    #[test]
    fn nan_anchors_sort_farthest_regardless_of_sign() {
        let items = vec![
            quad(0, Vec3::ZERO),
            quad(1, Vec3::new(-f32::NAN, 0.0, 0.0)),
            quad(2, Vec3::new(f32::NAN, 0.0, 0.0)),
        ];
        let sorted = sort_back_to_front(&items, Vec3::ONE);
        assert_eq!(ids(&sorted), vec![1, 2, 0]);

        let mut sorter = BackToFront::new();
        let order: Vec<usize> = sorter.sort(&items, Vec3::ONE).iter().map(|id| id.index()).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn inf_minus_inf_anchor_sorts_farthest() {
        let inf = f32::INFINITY;
        let items = vec![
            quad(0, Vec3::new(0.2, 0.3, 1.9)),
            quad(1, Vec3::new(inf - inf, 0.0, 0.0)),
        ];
        let sorted = sort_back_to_front(&items, Vec3::new(0.0, 1.0, 6.0));
        assert_eq!(ids(&sorted), vec![1, 0]);
    }

    #[test]
    fn sorting_does_not_touch_drawables() {
        let steps = staircase();
        let before = steps.clone();
        let _ = sort_back_to_front(&steps, Vec3::new(0.0, 1.0, 6.0));
        assert_eq!(steps, before);
    }
}
