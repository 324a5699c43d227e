use crate::{Block, BlockKind, Color, Pos};

pub const FRAME_STROKE: i32 = 3;
pub const HIGHLIGHT_STROKE: i32 = 5;

/// one rectangle for the renderer; stroke 0 is a fill, anything else an outline
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Drawable {
    pub color: Color,
    pub pos: Pos,
    pub size: i32,
    pub stroke: i32,
}

impl Block {
    /// A fill plus a frame rectangle for every leaf, in one flat list. Leaf
    /// order is unspecified.
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut out = Vec::new();
        self.push_drawables(&mut out);
        out
    }

    fn push_drawables(&self, out: &mut Vec<Drawable>) {
        match &self.kind {
            BlockKind::Leaf(color) => {
                out.push(Drawable {
                    color: *color,
                    pos: self.pos,
                    size: self.size,
                    stroke: 0,
                });
                out.push(Drawable {
                    color: Color::FRAME,
                    pos: self.pos,
                    size: self.size,
                    stroke: FRAME_STROKE,
                });
            }
            BlockKind::Split(children) => {
                for child in children.iter() {
                    child.push_drawables(out);
                }
            }
        }
    }

    /// the outline the renderer layers over the selected block
    pub fn highlight_frame(&self) -> Drawable {
        Drawable {
            color: Color::HIGHLIGHT,
            pos: self.pos,
            size: self.size,
            stroke: HIGHLIGHT_STROKE,
        }
    }
}
