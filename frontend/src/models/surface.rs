use super::StreamHandle;

/// What the main video surface is currently attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub handle: Option<StreamHandle>,
    /// Attaching `handle` was refused
    pub failed: bool,
    /// Linear audio gain applied to the attached stream
    pub gain: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            handle: None,
            failed: false,
            gain: 1.0,
        }
    }
}
