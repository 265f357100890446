//! Occlusion ordering
//!
//! Roots are drawn back to front. A root must come after every root it sits
//! in front of; children and attached images are drawn with their root.

use funfair_world::{CoordsXY, Direction};

use crate::paint_struct::{PaintBoundBox, PaintStructId};
use crate::session::PaintSession;

/// A bounding box rotated into the view, larger x and y nearer the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ViewBox {
    x: i32,
    y: i32,
    z: i32,
    x_end: i32,
    y_end: i32,
    z_end: i32,
}

impl ViewBox {
    fn new(bounds: &PaintBoundBox, rotation: Direction) -> Self {
        let a = CoordsXY::new(bounds.x, bounds.y).rotate(rotation);
        let b = CoordsXY::new(bounds.x_end, bounds.y_end).rotate(rotation);
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            z: bounds.z,
            x_end: a.x.max(b.x),
            y_end: a.y.max(b.y),
            z_end: bounds.z_end,
        }
    }

    /// Sort key along the viewing axis
    fn depth(&self) -> i32 {
        self.x + self.y
    }

    /// Whether `self` has to be drawn over `other`
    fn in_front_of(&self, other: &ViewBox) -> bool {
        self.z_end >= other.z
            && self.y_end >= other.y
            && self.x_end >= other.x
            && !(self.z < other.z_end && self.y < other.y_end && self.x < other.x_end)
    }
}

impl PaintSession {
    /// Roots in draw order, each followed by its children
    pub fn arrange(&self) -> Vec<PaintStructId> {
        let roots = self.roots();
        let boxes: Vec<ViewBox> = roots
            .iter()
            .filter_map(|id| self.paint_struct(*id))
            .map(|ps| ViewBox::new(&ps.bounds, self.current_rotation))
            .collect();
        let n = boxes.len();

        // behind[i] lists the roots that must be drawn before root i
        let mut behind: Vec<Vec<usize>> = vec![Vec::new(); n];
        for i in 0..n {
            for j in (i + 1)..n {
                let i_front = boxes[i].in_front_of(&boxes[j]);
                let j_front = boxes[j].in_front_of(&boxes[i]);
                if i_front && !j_front {
                    behind[i].push(j);
                } else if j_front && !i_front {
                    behind[j].push(i);
                }
            }
        }

        let mut waiting: Vec<usize> = behind.iter().map(|b| b.len()).collect();
        let mut in_front: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (i, list) in behind.iter().enumerate() {
            for &j in list {
                in_front[j].push(i);
            }
        }

        let key = |i: usize| (boxes[i].depth(), boxes[i].z, i);
        let mut placed = vec![false; n];
        let mut order = Vec::with_capacity(self.paint_structs().len());

        for _ in 0..n {
            let ready = (0..n).filter(|&i| !placed[i] && waiting[i] == 0).min_by_key(|&i| key(i));
            // Overlapping boxes can form a cycle; break it at the deepest root
            let candidate =
                ready.or_else(|| (0..n).filter(|&i| !placed[i]).min_by_key(|&i| key(i)));
            let next = match candidate {
                Some(next) => next,
                None => break,
            };
            placed[next] = true;
            for &k in &in_front[next] {
                waiting[k] = waiting[k].saturating_sub(1);
            }

            let root = roots[next];
            order.push(root);
            if let Some(ps) = self.paint_struct(root) {
                order.extend(ps.children.iter().copied());
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaintConfig;
    use crate::image_id::ImageId;
    use crate::paint_struct::BoundBoxXYZ;
    use funfair_world::CoordsXYZ;

    fn bb(ox: i32, oy: i32, oz: i32, lx: i32, ly: i32, lz: i32) -> BoundBoxXYZ {
        BoundBoxXYZ::new(CoordsXYZ::new(ox, oy, oz), CoordsXYZ::new(lx, ly, lz))
    }

    fn indices(order: &[PaintStructId]) -> Vec<u32> {
        order.iter().map(|id| id.0).collect()
    }

    #[test]
    fn test_floor_before_wall() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        session.add_image_as_parent(ImageId::new(1), CoordsXYZ::default(), bb(31, 0, 0, 1, 32, 48));
        session.add_image_as_parent(ImageId::new(2), CoordsXYZ::default(), bb(0, 0, 0, 32, 32, 0));
        assert_eq!(indices(&session.arrange()), vec![1, 0]);
    }

    #[test]
    fn test_children_follow_root() {
        let mut session = PaintSession::new(0, &PaintConfig::default());
        session.add_image_as_parent(
            ImageId::new(1),
            CoordsXYZ::default(),
            bb(16, 16, 0, 16, 16, 8),
        );
        session.add_image_as_child(ImageId::new(2), CoordsXYZ::default(), bb(16, 16, 0, 16, 16, 8));
        session.add_image_as_parent(ImageId::new(3), CoordsXYZ::default(), bb(0, 0, 0, 8, 8, 8));
        assert_eq!(indices(&session.arrange()), vec![2, 0, 1]);
    }

    #[test]
    fn test_rotation_reverses_depth() {
        let build = |rotation| {
            let mut session = PaintSession::new(rotation, &PaintConfig::default());
            session.begin_tile(CoordsXY::new(0, 0));
            session.add_image_as_parent(
                ImageId::new(1),
                CoordsXYZ::default(),
                bb(0, 0, 0, 8, 8, 8),
            );
            session.add_image_as_parent(
                ImageId::new(2),
                CoordsXYZ::default(),
                bb(24, 24, 0, 8, 8, 8),
            );
            session.arrange()
        };
        // Local offsets are view-relative, so the later box is nearer in every rotation
        for rotation in 0..4 {
            assert_eq!(indices(&build(rotation)), vec![0, 1], "rotation {rotation}");
        }
    }

    #[test]
    fn test_arrange_is_deterministic() {
        let mut session = PaintSession::new(1, &PaintConfig::default());
        for i in 0..6 {
            session.add_image_as_parent(
                ImageId::new(i),
                CoordsXYZ::default(),
                bb(0, 0, 0, 32, 32, 8),
            );
        }
        let first = session.arrange();
        assert_eq!(first, session.arrange());
        assert_eq!(first.len(), 6);
    }
}
