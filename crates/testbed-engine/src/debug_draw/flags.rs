bitflags::bitflags! {
    /// Categories the physics engine draws. The renderer ignores these; they
    /// only decide which calls the engine makes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DrawFlags: u32 {
        const SHAPE = 1 << 0;           // Shapes
        const JOINT = 1 << 1;           // Joint connections
        const AABB = 1 << 2;            // Broad-phase bounding boxes
        const PAIR = 1 << 3;            // Broad-phase pairs
        const CENTER_OF_MASS = 1 << 4;  // Body transforms
    }
}

impl Default for DrawFlags {
    fn default() -> Self {
        DrawFlags::SHAPE
    }
}
