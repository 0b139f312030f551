// Copyright @yucwang 2026

/// When a material section appends its accumulator to the scene.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MaterialPolicy {
    /// A snapshot after every body line; N body lines give N materials.
    PerLine,
    /// One material when the section closes.
    PerSection,
}

impl Default for MaterialPolicy {
    fn default() -> Self {
        MaterialPolicy::PerLine
    }
}

/// Where an `Rx`/`Ry`/`Rz` token finds its angle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RotationIndexing {
    /// `Rx45` or `Rx 45`: the token's own remainder, else the next token.
    FollowingToken,
    /// Every axis token reads the second token of the line.
    SecondToken,
}

impl Default for RotationIndexing {
    fn default() -> Self {
        RotationIndexing::FollowingToken
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub material_policy: MaterialPolicy,
    pub rotation_indexing: RotationIndexing,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_material_policy(mut self, policy: MaterialPolicy) -> Self {
        self.material_policy = policy;
        self
    }

    pub fn with_rotation_indexing(mut self, indexing: RotationIndexing) -> Self {
        self.rotation_indexing = indexing;
        self
    }
}
