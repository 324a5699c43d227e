use crate::color::Color;
use crate::pos::Pos;
use crate::quad::Quad;

/// A square board region: a uniform-color leaf, or four half-size children in
/// ur/ul/ll/lr order. `max_depth` is shared by every node of one tree and
/// geometry lives on every node; the update op keeps it consistent after
/// structural changes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Block {
    pub(crate) pos: Pos,
    pub(crate) size: i32,
    pub(crate) level: u8,
    pub(crate) max_depth: u8,
    pub(crate) kind: BlockKind,
}

/// exactly one of these per node, never both, never neither
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum BlockKind {
    Leaf(Color),
    Split(Box<Quad<Block>>),
}

impl Block {
    /// caps `flatten` at a 4096x4096 grid
    pub const MAX_DEPTH: u8 = 12;

    pub fn new_leaf(pos: Pos, size: i32, level: u8, max_depth: u8, color: Color) -> Self {
        assert!(level <= max_depth && max_depth <= Block::MAX_DEPTH);
        Block {
            pos,
            size,
            level,
            max_depth,
            kind: BlockKind::Leaf(color),
        }
    }

    pub fn new_split(pos: Pos, size: i32, level: u8, max_depth: u8, children: Quad<Block>) -> Self {
        assert!(level < max_depth && max_depth <= Block::MAX_DEPTH);
        for child in &children {
            assert_eq!(child.level, level + 1);
            assert_eq!(child.max_depth, max_depth);
        }
        Block {
            pos,
            size,
            level,
            max_depth,
            kind: BlockKind::Split(Box::new(children)),
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, BlockKind::Leaf(_))
    }

    pub fn color(&self) -> Option<Color> {
        match &self.kind {
            BlockKind::Leaf(color) => Some(*color),
            BlockKind::Split(_) => None,
        }
    }

    pub fn children(&self) -> Option<&Quad<Block>> {
        match &self.kind {
            BlockKind::Leaf(_) => None,
            BlockKind::Split(children) => Some(children),
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Quad<Block>> {
        match &mut self.kind {
            BlockKind::Leaf(_) => None,
            BlockKind::Split(children) => Some(children),
        }
    }

    /// half-open square test: the left and top edges are in, right and bottom out
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.pos.x
            && x < self.pos.x + self.size
            && y >= self.pos.y
            && y < self.pos.y + self.size
    }
}
