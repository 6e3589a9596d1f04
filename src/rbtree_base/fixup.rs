use bitmask_enum::bitmask;

/// The rebalancing cases an insertion went through.
#[bitmask(u8)]
pub enum FixupFlags {
    Clean = 0,
    RootRecolor = 1,
    Recolor = 2,
    InnerRotation = 4,
    OuterRotation = 8,
    RootChanged = 16,
}

impl FixupFlags {
    pub fn has(&self, flag: FixupFlags) -> bool {
        self.contains(flag)
    }

    pub fn rotated(&self) -> bool {
        self.intersects(FixupFlags::InnerRotation | FixupFlags::OuterRotation)
    }
}
